//! Cell lattice with wall and highlight flags
//!
//! Cells live in one flat vector addressed by `y * cells_width + x`.
//! World coordinates are pixels with the origin at the top-left corner.

use glam::{IVec2, Vec2};
use thiserror::Error;

/// A coordinate or index fell outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position is outside the grid")]
pub struct OutOfBounds;

/// One grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub is_wall: bool,
    /// Set by the raycaster on hit, render-only
    pub highlighted: bool,
}

/// Pixel rectangle of a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub min: Vec2,
    pub size: f32,
}

impl CellRect {
    pub fn max(&self) -> Vec2 {
        self.min + Vec2::splat(self.size)
    }
}

/// Fixed-size lattice of square cells
#[derive(Debug, Clone)]
pub struct Grid {
    cells_width: u32,
    cells_height: u32,
    cell_size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(cells_width: u32, cells_height: u32, cell_size: u32) -> Self {
        Self {
            cells_width,
            cells_height,
            cell_size,
            cells: vec![Cell::default(); (cells_width * cells_height) as usize],
        }
    }

    /// Grid that covers as many whole cells as fit in a window
    pub fn for_window(width_px: u32, height_px: u32, cell_size: u32) -> Self {
        Self::new(width_px / cell_size, height_px / cell_size, cell_size)
    }

    #[inline]
    pub fn cells_width(&self) -> u32 {
        self.cells_width
    }

    #[inline]
    pub fn cells_height(&self) -> u32 {
        self.cells_height
    }

    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    #[inline]
    pub fn width_px(&self) -> f32 {
        (self.cells_width * self.cell_size) as f32
    }

    #[inline]
    pub fn height_px(&self) -> f32 {
        (self.cells_height * self.cell_size) as f32
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether a world point lies in `[0, width_px) x [0, height_px)`
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width_px() && p.y < self.height_px()
    }

    /// Cell index of a world point
    pub fn index_of(&self, p: Vec2) -> Result<usize, OutOfBounds> {
        if !self.contains(p) {
            return Err(OutOfBounds);
        }
        let cell = (p / self.cell_size as f32).floor().as_ivec2();
        self.cell_at(cell).ok_or(OutOfBounds)
    }

    /// Index of signed cell coordinates, `None` outside the lattice
    #[inline]
    pub fn cell_at(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0
            || cell.y < 0
            || cell.x >= self.cells_width as i32
            || cell.y >= self.cells_height as i32
        {
            return None;
        }
        Some(cell.y as usize * self.cells_width as usize + cell.x as usize)
    }

    /// Cell coordinates of an index
    pub fn cell_coords(&self, index: usize) -> Result<IVec2, OutOfBounds> {
        if index >= self.cells.len() {
            return Err(OutOfBounds);
        }
        let w = self.cells_width as usize;
        Ok(IVec2::new((index % w) as i32, (index / w) as i32))
    }

    /// Pixel rectangle covered by a cell
    pub fn cell_rect(&self, index: usize) -> Result<CellRect, OutOfBounds> {
        let coords = self.cell_coords(index)?;
        Ok(CellRect {
            min: (coords * self.cell_size as i32).as_vec2(),
            size: self.cell_size as f32,
        })
    }

    pub fn set_wall(&mut self, index: usize, wall: bool) -> Result<(), OutOfBounds> {
        let cell = self.cells.get_mut(index).ok_or(OutOfBounds)?;
        cell.is_wall = wall;
        Ok(())
    }

    /// Flip a cell, returning its new state
    pub fn toggle_wall(&mut self, index: usize) -> Result<bool, OutOfBounds> {
        let cell = self.cells.get_mut(index).ok_or(OutOfBounds)?;
        cell.is_wall = !cell.is_wall;
        Ok(cell.is_wall)
    }

    /// False for indices outside the grid
    #[inline]
    pub fn is_wall(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|c| c.is_wall)
    }

    #[inline]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|c| c.highlighted)
    }

    pub fn clear_highlights(&mut self) {
        for cell in &mut self.cells {
            cell.highlighted = false;
        }
    }

    pub fn highlight(&mut self, index: usize) -> Result<(), OutOfBounds> {
        let cell = self.cells.get_mut(index).ok_or(OutOfBounds)?;
        cell.highlighted = true;
        Ok(())
    }

    /// Indices of all wall cells in index order
    pub fn walls(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_wall)
            .map(|(i, _)| i)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
