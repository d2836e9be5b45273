// Fixed colours for walls, sprites, background and the overhead map.

use crate::engine::Axis;
use crate::renderer::Rgba;
use crate::world::Cell;

#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub const WALL_GREY: Rgba = rgb(128, 128, 128);
pub const WALL_GREY_DARK: Rgba = rgb(64, 64, 64);
pub const WALL_RED: Rgba = rgb(255, 0, 0);
pub const WALL_RED_DARK: Rgba = rgb(178, 0, 0);
pub const SPRITE: Rgba = rgb(255, 255, 0);

pub const MAP_SOLID: Rgba = WALL_GREY;
pub const MAP_OPEN: Rgba = rgb(0, 0, 0);
pub const MAP_RAY: Rgba = SPRITE;
pub const MAP_FACING: Rgba = WALL_RED;

/// Slice colour for a struck cell. Walls hit on a vertical grid line get the
/// darker shade; sprites are never shaded.
pub fn wall_color(kind: Cell, axis: Axis) -> Rgba {
    match (kind, axis) {
        (Cell::Sprite, _) => SPRITE,
        (Cell::Wall(2), Axis::Horizontal) => WALL_RED,
        (Cell::Wall(2), Axis::Vertical) => WALL_RED_DARK,
        (_, Axis::Horizontal) => WALL_GREY,
        (_, Axis::Vertical) => WALL_GREY_DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_0rgb() {
        assert_eq!(rgb(0x12, 0x34, 0x56), 0x00_123456);
    }

    #[test]
    fn vertical_walls_are_darker() {
        for code in [1u8, 2] {
            let h = wall_color(Cell::Wall(code), Axis::Horizontal);
            let v = wall_color(Cell::Wall(code), Axis::Vertical);
            assert_ne!(h, v);
            assert!(v.to_be_bytes().iter().zip(h.to_be_bytes()).all(|(a, b)| *a <= b));
        }
        assert_eq!(wall_color(Cell::Sprite, Axis::Vertical), SPRITE);
        assert_eq!(wall_color(Cell::Sprite, Axis::Horizontal), SPRITE);
    }
}
