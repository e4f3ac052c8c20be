//! Grid raycasting (DDA)
//!
//! Walks a ray one grid line at a time. Each axis keeps the ray length at
//! which the ray next crosses a vertical (x) or horizontal (y) grid line;
//! the smaller of the two decides which neighbour cell is entered next.
//!
//! Lengths are in world pixels along the ray, so a hit distance converts
//! straight back to a point with `origin + unit_dir * distance`.

use glam::{IVec2, Vec2};

use super::grid::Grid;
use crate::consts::MAX_DISTANCE_FACTOR;

/// First wall cell crossed by a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Flat index of the wall cell
    pub cell: usize,
    /// Where the ray enters the wall cell
    pub point: Vec2,
    /// Ray length from origin to `point`
    pub distance: f32,
}

/// One cell entered during traversal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub cell: IVec2,
    pub distance: f32,
}

/// Ray length per cell crossed along one axis.
///
/// `cell_size * sqrt(1 + (other / along)^2)`, infinite when the ray never
/// crosses a line on this axis.
#[inline]
fn axis_step_size(along: f32, other: f32, cell_size: f32) -> f32 {
    if along == 0.0 {
        return f32::INFINITY;
    }
    let ratio = other / along;
    cell_size * (1.0 + ratio * ratio).sqrt()
}

/// Starting cell, step sign and first-crossing length for one axis
fn axis_start(origin: f32, dir: f32, step_size: f32, cell_size: f32) -> (i32, i32, f32) {
    let cell = (origin / cell_size).floor();
    let offset = origin - cell * cell_size;
    let cell = cell as i32;

    if dir < 0.0 {
        if offset == 0.0 {
            // On a grid line heading negative: the origin belongs to the cell
            // behind the line and the next line is a whole cell away
            (cell - 1, -1, step_size)
        } else {
            (cell, -1, offset / cell_size * step_size)
        }
    } else if dir > 0.0 {
        (cell, 1, (cell_size - offset) / cell_size * step_size)
    } else {
        (cell, 0, f32::INFINITY)
    }
}

/// Iterator over the cells a ray enters, in order
#[derive(Debug, Clone)]
pub struct Traversal {
    cell: IVec2,
    step: IVec2,
    step_size: Vec2,
    ray_length: Vec2,
    max_distance: f32,
    done: bool,
}

impl Traversal {
    /// Set up a traversal. `dir` must be non-zero.
    pub fn new(origin: Vec2, dir: Vec2, cell_size: f32, max_distance: f32) -> Self {
        debug_assert!(dir != Vec2::ZERO, "degenerate ray");

        let step_size = Vec2::new(
            axis_step_size(dir.x, dir.y, cell_size),
            axis_step_size(dir.y, dir.x, cell_size),
        );
        let (cell_x, step_x, first_x) = axis_start(origin.x, dir.x, step_size.x, cell_size);
        let (cell_y, step_y, first_y) = axis_start(origin.y, dir.y, step_size.y, cell_size);

        Self {
            cell: IVec2::new(cell_x, cell_y),
            step: IVec2::new(step_x, step_y),
            step_size,
            ray_length: Vec2::new(first_x, first_y),
            max_distance,
            done: false,
        }
    }

    /// Cell the traversal currently sits in
    pub fn cell(&self) -> IVec2 {
        self.cell
    }

    /// Ray length per cell crossed, per axis
    pub fn step_size(&self) -> Vec2 {
        self.step_size
    }

    /// Ray length at the next line crossing, per axis
    pub fn ray_length(&self) -> Vec2 {
        self.ray_length
    }
}

impl Iterator for Traversal {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }

        // X wins exact ties (diagonal corners)
        let distance = if self.ray_length.x <= self.ray_length.y {
            self.cell.x += self.step.x;
            let d = self.ray_length.x;
            self.ray_length.x += self.step_size.x;
            d
        } else {
            self.cell.y += self.step.y;
            let d = self.ray_length.y;
            self.ray_length.y += self.step_size.y;
            d
        };

        if distance.is_nan() || distance > self.max_distance {
            self.done = true;
            return None;
        }

        Some(Step {
            cell: self.cell,
            distance,
        })
    }
}

/// Longest ray length a cast will walk before giving up
#[inline]
pub fn max_distance(grid: &Grid) -> f32 {
    grid.width_px().max(grid.height_px()) * MAX_DISTANCE_FACTOR
}

/// Cast a ray from `origin` towards `target` and return the first wall hit.
///
/// Misses when either point is outside the grid or the two coincide.
pub fn cast(grid: &Grid, origin: Vec2, target: Vec2) -> Option<RayHit> {
    if !grid.contains(origin) || !grid.contains(target) {
        return None;
    }

    let dir = target - origin;
    if dir == Vec2::ZERO {
        return None;
    }
    let unit_dir = dir.normalize();

    Traversal::new(origin, dir, grid.cell_size() as f32, max_distance(grid)).find_map(|step| {
        let cell = grid.cell_at(step.cell)?;
        grid.is_wall(cell).then(|| RayHit {
            cell,
            point: origin + unit_dir * step.distance,
            distance: step.distance,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    fn demo_grid() -> Grid {
        Grid::new(30, 20, 32)
    }

    fn grid_with_walls(walls: &[(i32, i32)]) -> Grid {
        let mut grid = demo_grid();
        for &(x, y) in walls {
            let index = grid.cell_at(IVec2::new(x, y)).unwrap();
            grid.set_wall(index, true).unwrap();
        }
        grid
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < EPS
    }

    #[test]
    fn test_diagonal_hit() {
        let grid = grid_with_walls(&[(10, 10)]);

        let hit = cast(&grid, Vec2::new(100.0, 100.0), Vec2::new(400.0, 400.0)).unwrap();
        assert_eq!(hit.cell, 10 * 30 + 10);
        // Enters at the corner of the wall cell facing the origin
        assert!(approx(hit.point, Vec2::new(320.0, 320.0)), "{:?}", hit.point);

        let rect = grid.cell_rect(hit.cell).unwrap();
        assert!((hit.point.x - rect.min.x).abs() < EPS || (hit.point.y - rect.min.y).abs() < EPS);
    }

    #[test]
    fn test_miss_without_walls() {
        let grid = demo_grid();
        assert_eq!(cast(&grid, Vec2::new(100.0, 100.0), Vec2::new(400.0, 400.0)), None);
        assert_eq!(cast(&grid, Vec2::new(500.0, 20.0), Vec2::new(10.0, 600.0)), None);
    }

    #[test]
    fn test_miss_walks_to_distance_cap() {
        let grid = demo_grid();
        let cap = max_distance(&grid);
        assert_eq!(cap, 9600.0);

        let last = Traversal::new(Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0), 32.0, cap)
            .last()
            .unwrap();
        assert!(last.distance <= cap);
        assert!(last.distance > cap - 32.0 * 2f32.sqrt());
    }

    #[test]
    fn test_out_of_bounds_miss() {
        let grid = grid_with_walls(&[(0, 9), (1, 9), (2, 9)]);
        assert_eq!(cast(&grid, Vec2::new(100.0, 300.0), Vec2::new(-5.0, 300.0)), None);
        assert_eq!(cast(&grid, Vec2::new(-5.0, 300.0), Vec2::new(100.0, 300.0)), None);
        assert_eq!(cast(&grid, Vec2::new(100.0, 300.0), Vec2::new(960.0, 300.0)), None);
    }

    #[test]
    fn test_degenerate_ray_misses() {
        let grid = grid_with_walls(&[(3, 3)]);
        assert_eq!(cast(&grid, Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0)), None);
    }

    #[test]
    fn test_horizontal_ray() {
        let grid = grid_with_walls(&[(8, 3), (12, 3)]);

        let hit = cast(&grid, Vec2::new(100.0, 100.0), Vec2::new(400.0, 100.0)).unwrap();
        assert_eq!(hit.cell, 3 * 30 + 8);
        assert!(approx(hit.point, Vec2::new(256.0, 100.0)), "{:?}", hit.point);
        assert!((hit.distance - 156.0).abs() < EPS);

        // Heading left finds the right-hand edge of the wall
        let grid = grid_with_walls(&[(2, 3)]);
        let hit = cast(&grid, Vec2::new(300.0, 100.0), Vec2::new(10.0, 100.0)).unwrap();
        assert_eq!(hit.cell, 3 * 30 + 2);
        assert!(approx(hit.point, Vec2::new(96.0, 100.0)), "{:?}", hit.point);
    }

    #[test]
    fn test_vertical_ray() {
        let grid = grid_with_walls(&[(3, 15)]);
        let hit = cast(&grid, Vec2::new(100.0, 100.0), Vec2::new(100.0, 600.0)).unwrap();
        assert_eq!(hit.cell, 15 * 30 + 3);
        assert!(approx(hit.point, Vec2::new(100.0, 480.0)), "{:?}", hit.point);

        let grid = grid_with_walls(&[(3, 1)]);
        let hit = cast(&grid, Vec2::new(100.0, 600.0), Vec2::new(100.0, 10.0)).unwrap();
        assert_eq!(hit.cell, 30 + 3);
        assert!(approx(hit.point, Vec2::new(100.0, 64.0)), "{:?}", hit.point);
    }

    #[test]
    fn test_axis_aligned_step_sizes() {
        let t = Traversal::new(Vec2::new(100.0, 100.0), Vec2::new(50.0, 0.0), 32.0, 9600.0);
        assert_eq!(t.step_size().x, 32.0);
        assert!(t.step_size().y.is_infinite());
        assert!(t.ray_length().y.is_infinite());

        // Never steps in y
        assert!(t.take(100).all(|s| s.cell.y == 3));
    }

    #[test]
    fn test_boundary_aligned_negative_x() {
        let t = Traversal::new(Vec2::new(128.0, 100.0), Vec2::new(-78.0, 0.0), 32.0, 9600.0);
        assert_eq!(t.ray_length().x, t.step_size().x);
        assert_eq!(t.ray_length().x, 32.0);
        assert_eq!(t.cell(), IVec2::new(3, 3));

        let first = t.clone().next().unwrap();
        assert_eq!(first.cell, IVec2::new(2, 3));
        assert_eq!(first.distance, 32.0);
    }

    #[test]
    fn test_boundary_aligned_negative_y() {
        let t = Traversal::new(Vec2::new(100.0, 128.0), Vec2::new(10.0, -40.0), 32.0, 9600.0);
        assert!((t.ray_length().y - t.step_size().y).abs() < EPS);
        assert_eq!(t.cell().y, 3);
    }

    #[test]
    fn test_boundary_aligned_positive() {
        let t = Traversal::new(Vec2::new(128.0, 100.0), Vec2::new(78.0, 0.0), 32.0, 9600.0);
        assert_eq!(t.ray_length().x, 32.0);
        assert_eq!(t.cell(), IVec2::new(4, 3));
    }

    #[test]
    fn test_tie_prefers_x() {
        let mut t = Traversal::new(Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0), 32.0, 9600.0);
        let a = t.next().unwrap();
        let b = t.next().unwrap();
        assert_eq!(a.cell, IVec2::new(4, 3));
        assert_eq!(b.cell, IVec2::new(4, 4));
        assert_eq!(a.distance, b.distance);
    }

    #[test]
    fn test_first_wall_wins() {
        let grid = grid_with_walls(&[(6, 3), (5, 3)]);
        let hit = cast(&grid, Vec2::new(100.0, 100.0), Vec2::new(900.0, 100.0)).unwrap();
        assert_eq!(hit.cell, 3 * 30 + 5);
    }

    #[test]
    fn test_hit_beyond_target() {
        // The ray keeps going past the target point
        let grid = grid_with_walls(&[(20, 3)]);
        let hit = cast(&grid, Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0)).unwrap();
        assert_eq!(hit.cell, 3 * 30 + 20);
    }

    fn world_point() -> impl Strategy<Value = Vec2> {
        (0.0f32..960.0, 0.0f32..640.0).prop_map(|(x, y)| Vec2::new(x, y))
    }

    proptest! {
        #[test]
        fn prop_distances_monotone_and_cells_adjacent(
            origin in world_point(),
            target in world_point(),
        ) {
            prop_assume!(origin != target);
            let cap = 9600.0;
            let mut traversal = Traversal::new(origin, target - origin, 32.0, cap);
            let mut cell = traversal.cell();
            let mut last = 0.0f32;
            let mut steps = 0usize;
            for step in traversal.by_ref() {
                prop_assert!(step.distance >= last);
                prop_assert!(step.distance <= cap);
                let moved = (step.cell - cell).abs();
                prop_assert_eq!(moved.x + moved.y, 1);
                last = step.distance;
                cell = step.cell;
                steps += 1;
            }
            prop_assert!(steps <= 2 * (cap / 32.0) as usize + 4);
        }

        #[test]
        fn prop_hit_is_wall_on_path(
            origin in world_point(),
            target in world_point(),
            walls in prop::collection::vec(0usize..600, 0..60),
        ) {
            prop_assume!(origin != target);
            let mut grid = demo_grid();
            for &w in &walls {
                grid.set_wall(w, true).unwrap();
            }

            match cast(&grid, origin, target) {
                Some(hit) => {
                    prop_assert!(grid.is_wall(hit.cell));
                    let coords = grid.cell_coords(hit.cell).unwrap();
                    let first_wall = Traversal::new(origin, target - origin, 32.0, max_distance(&grid))
                        .find(|s| grid.cell_at(s.cell).is_some_and(|i| grid.is_wall(i)));
                    prop_assert_eq!(first_wall.map(|s| s.cell), Some(coords));

                    let rect = grid.cell_rect(hit.cell).unwrap();
                    let slack = Vec2::splat(0.05);
                    prop_assert!(hit.point.cmpge(rect.min - slack).all());
                    prop_assert!(hit.point.cmple(rect.max() + slack).all());
                }
                None => {
                    let any_wall = Traversal::new(origin, target - origin, 32.0, max_distance(&grid))
                        .any(|s| grid.cell_at(s.cell).is_some_and(|i| grid.is_wall(i)));
                    prop_assert!(!any_wall);
                }
            }
        }
    }
}
