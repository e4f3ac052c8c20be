//! Mobile point and target point
//!
//! Both are small integer boxes positioned by their top-left corner.

use glam::{IVec2, Vec2};

use crate::box_center;

/// Movement key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in screen space (y grows downward)
    pub fn unit(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

/// The player-controlled point the ray starts from
#[derive(Debug, Clone, PartialEq)]
pub struct MobilePoint {
    pub pos: IVec2,
    pub size: i32,
    /// Pixels per tick, each axis one of `-speed`, `0`, `speed`
    pub vel: IVec2,
}

impl MobilePoint {
    /// Box of `size` centred on `center`
    pub fn centered_at(center: IVec2, size: i32) -> Self {
        Self {
            pos: center - IVec2::splat(size / 2),
            size,
            vel: IVec2::ZERO,
        }
    }

    /// Key edge to velocity. A press sets that axis, a release zeroes it.
    pub fn apply_key(&mut self, dir: Direction, pressed: bool, speed: i32) {
        let unit = dir.unit();
        if unit.x != 0 {
            self.vel.x = if pressed { unit.x * speed } else { 0 };
        } else {
            self.vel.y = if pressed { unit.y * speed } else { 0 };
        }
    }

    /// Integrate one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        box_center(self.pos, self.size)
    }
}

/// Box that follows the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPoint {
    pub pos: IVec2,
    pub size: i32,
}

impl TargetPoint {
    pub fn centered_at(center: IVec2, size: i32) -> Self {
        Self {
            pos: center - IVec2::splat(size / 2),
            size,
        }
    }

    /// Recentre on the latest pointer position
    pub fn track(&mut self, pointer: IVec2) {
        self.pos = pointer - IVec2::splat(self.size / 2);
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        box_center(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_sets_axis() {
        let mut p = MobilePoint::centered_at(IVec2::new(320, 320), 10);
        p.apply_key(Direction::Up, true, 5);
        assert_eq!(p.vel, IVec2::new(0, -5));
        p.apply_key(Direction::Right, true, 5);
        assert_eq!(p.vel, IVec2::new(5, -5));
    }

    #[test]
    fn test_last_write_wins_per_axis() {
        let mut p = MobilePoint::centered_at(IVec2::ZERO, 10);
        p.apply_key(Direction::Left, true, 5);
        p.apply_key(Direction::Right, true, 5);
        assert_eq!(p.vel.x, 5);

        // Releasing either key on the axis stops it
        p.apply_key(Direction::Left, false, 5);
        assert_eq!(p.vel.x, 0);
        assert_eq!(p.vel.y, 0);
    }

    #[test]
    fn test_advance_integrates_velocity() {
        let mut p = MobilePoint::centered_at(IVec2::new(320, 320), 10);
        assert_eq!(p.pos, IVec2::new(315, 315));
        p.apply_key(Direction::Down, true, 5);
        p.apply_key(Direction::Left, true, 5);
        p.advance();
        p.advance();
        assert_eq!(p.pos, IVec2::new(305, 325));
        assert_eq!(p.center(), Vec2::new(310.0, 330.0));
    }

    #[test]
    fn test_target_tracks_pointer() {
        let mut t = TargetPoint::centered_at(IVec2::new(640, 320), 10);
        t.track(IVec2::new(400, 400));
        assert_eq!(t.pos, IVec2::new(395, 395));
        assert_eq!(t.center(), Vec2::new(400.0, 400.0));
    }
}
