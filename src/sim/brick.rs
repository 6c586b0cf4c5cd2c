//! Bricks and the brick grid
//!
//! The grid is laid out once, row-major, and never reallocated: resets
//! restore bricks in place so references held by a view layer stay valid.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;

/// Row color palette, cycled top to bottom (0xRRGGBB, cosmetic only)
const ROW_COLORS: [u32; 5] = [0xFF6B6B, 0xFFA94D, 0xFFE066, 0x69DB7C, 0x4DABF7];

/// A single destructible cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner, fixed at grid layout
    pos: Vec2,
    width: f32,
    height: f32,
    /// Remaining hits; 0 means destroyed
    health: u32,
    /// Health at layout time, for restore
    initial_health: u32,
    color: u32,
}

impl Brick {
    pub fn new(x: f32, y: f32, width: f32, height: f32, health: u32, color: u32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
            health,
            initial_health: health,
            color,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Destroyed is derived, so health and the destroyed flag can never
    /// disagree
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Take one hit; a no-op once destroyed
    pub fn hit(&mut self) {
        if self.health > 0 {
            self.health -= 1;
        }
    }

    /// Back to layout-time health, from any state
    pub fn restore(&mut self) {
        self.health = self.initial_health;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// A fixed grid of bricks in row-major order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: u32,
    columns: u32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out `rows x columns` single-hit bricks starting at the offset
    pub fn new(
        rows: u32,
        columns: u32,
        brick_width: f32,
        brick_height: f32,
        offset_x: f32,
        offset_y: f32,
    ) -> Self {
        let mut bricks = Vec::with_capacity((rows * columns) as usize);
        for row in 0..rows {
            let color = ROW_COLORS[row as usize % ROW_COLORS.len()];
            for col in 0..columns {
                let x = offset_x + col as f32 * brick_width;
                let y = offset_y + row as f32 * brick_height;
                bricks.push(Brick::new(x, y, brick_width, brick_height, 1, color));
            }
        }
        Self {
            rows,
            columns,
            bricks,
        }
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// All bricks in row-major layout order
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn bricks_mut(&mut self) -> &mut [Brick] {
        &mut self.bricks
    }

    /// Non-destroyed bricks in layout order
    pub fn active_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.is_destroyed())
    }

    /// Vacuously true for an empty grid
    pub fn all_bricks_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| b.is_destroyed())
    }

    pub fn total_bricks(&self) -> usize {
        self.bricks.len()
    }

    pub fn remaining_bricks(&self) -> usize {
        self.active_bricks().count()
    }

    /// Restore every brick in place; no brick is ever reallocated
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_saturates_at_zero() {
        let mut brick = Brick::new(0.0, 0.0, 75.0, 20.0, 2, 0xFF6B6B);
        assert!(!brick.is_destroyed());

        brick.hit();
        assert_eq!(brick.health(), 1);
        assert!(!brick.is_destroyed());

        brick.hit();
        assert_eq!(brick.health(), 0);
        assert!(brick.is_destroyed());

        // Further hits are no-ops, never negative
        brick.hit();
        brick.hit();
        assert_eq!(brick.health(), 0);
    }

    #[test]
    fn test_restore_from_any_state() {
        let mut brick = Brick::new(0.0, 0.0, 75.0, 20.0, 3, 0xFF6B6B);
        brick.hit();
        brick.restore();
        assert_eq!(brick.health(), 3);

        brick.hit();
        brick.hit();
        brick.hit();
        assert!(brick.is_destroyed());
        brick.restore();
        assert_eq!(brick.health(), 3);
        assert!(!brick.is_destroyed());
    }

    #[test]
    fn test_grid_layout_row_major() {
        let grid = BrickGrid::new(2, 3, 75.0, 20.0, 50.0, 50.0);
        assert_eq!(grid.total_bricks(), 6);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);

        // Row-major: second brick is one column over, fourth starts row two
        assert_eq!(grid.bricks()[0].pos(), glam::Vec2::new(50.0, 50.0));
        assert_eq!(grid.bricks()[1].pos(), glam::Vec2::new(125.0, 50.0));
        assert_eq!(grid.bricks()[3].pos(), glam::Vec2::new(50.0, 70.0));
    }

    #[test]
    fn test_active_bricks_filter_preserves_order() {
        let mut grid = BrickGrid::new(1, 3, 75.0, 20.0, 0.0, 0.0);
        grid.bricks_mut()[1].hit();

        let active: Vec<f32> = grid.active_bricks().map(|b| b.pos().x).collect();
        assert_eq!(active, vec![0.0, 150.0]);
        assert_eq!(grid.remaining_bricks(), 2);
    }

    #[test]
    fn test_all_destroyed_and_vacuous_truth() {
        let mut grid = BrickGrid::new(1, 2, 75.0, 20.0, 0.0, 0.0);
        assert!(!grid.all_bricks_destroyed());

        for brick in grid.bricks_mut() {
            brick.hit();
        }
        assert!(grid.all_bricks_destroyed());

        let empty = BrickGrid::new(0, 0, 75.0, 20.0, 0.0, 0.0);
        assert!(empty.all_bricks_destroyed());
    }

    #[test]
    fn test_reset_restores_in_place() {
        let mut grid = BrickGrid::new(5, 8, 75.0, 20.0, 50.0, 50.0);
        assert_eq!(grid.total_bricks(), 40);

        for brick in grid.bricks_mut() {
            brick.hit();
        }
        grid.reset();

        assert_eq!(grid.total_bricks(), 40);
        assert_eq!(grid.remaining_bricks(), 40);
        assert!(!grid.all_bricks_destroyed());
    }

    #[test]
    fn test_row_colors_cycle() {
        let grid = BrickGrid::new(6, 1, 75.0, 20.0, 0.0, 0.0);
        assert_eq!(grid.bricks()[0].color(), ROW_COLORS[0]);
        assert_eq!(grid.bricks()[4].color(), ROW_COLORS[4]);
        // Sixth row wraps around to the first palette entry
        assert_eq!(grid.bricks()[5].color(), ROW_COLORS[0]);
    }
}
