//! Gridcast entry point
//!
//! Loads settings, opens the window and runs the frame loop.

use std::path::PathBuf;
use std::time::Instant;

use gridcast::Demo;
use gridcast::platform::{MacroquadInput, MacroquadRenderer, Polled};
use gridcast::settings::{SETTINGS_ENV, Settings};
use macroquad::prelude::{Conf, next_frame};

/// Settings file from the first argument, else the environment
fn settings_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(SETTINGS_ENV).map(PathBuf::from))
}

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: settings.title.clone(),
        window_width: settings.screen_width as i32,
        window_height: settings.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(settings: Settings) {
    let mut demo = Demo::new(&settings);
    let mut input = MacroquadInput::new();
    let mut renderer = MacroquadRenderer::default();

    loop {
        let polled = demo.frame(Instant::now(), &mut input, &mut renderer);
        next_frame().await;
        if polled == Polled::Quit {
            break;
        }
    }

    log::info!("Exiting after {} ticks", demo.clock().total_ticks());
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let settings = Settings::load_or_default(settings_path().as_deref());
    log::info!(
        "{} starting: {}x{} window, {}px cells",
        settings.title,
        settings.screen_width,
        settings.screen_height,
        settings.cell_size
    );

    macroquad::Window::from_config(window_conf(&settings), run(settings));
}
