use glam::{IVec2, Vec2};

use crate::renderer::Rgba;
use crate::world::Cell;

/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
    pub half_h: f32, // pre-derived for speed
    pub half_w: f32, // pre-derived for speed
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            half_h: h as f32 * 0.5,
            half_w: w as f32 * 0.5,
        }
    }
}

/// Which family of grid lines a ray crossed when it hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// `y = k * TILE_SIZE` lines.
    Horizontal,
    /// `x = k * TILE_SIZE` lines.
    Vertical,
}

/// Result of one grid search, alive for a single column only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallHit {
    pub axis: Axis,
    pub cell: IVec2,  // grid coordinates of the struck cell
    pub point: Vec2,  // world-space crossing point
    pub dist: f32,    // ray length, before fisheye correction
    pub kind: Cell,   // always Wall(_) or Sprite
}

impl WallHit {
    #[inline]
    pub fn is_sprite(&self) -> bool {
        self.kind == Cell::Sprite
    }
}

/// One filled rectangle contributed by a column.
///
/// Covers `x .. x + w` horizontally and `top .. bottom` vertically, already
/// clipped to the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSlice {
    pub x: usize,
    pub w: usize,
    pub top: i32,
    pub bottom: i32,
    pub color: Rgba,
    pub sprite: bool,
    pub axis: Axis,
    pub dist: f32,   // perpendicular (fisheye-corrected) distance
    pub point: Vec2, // world-space hit, used by the overhead map
}

impl WallSlice {
    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}
