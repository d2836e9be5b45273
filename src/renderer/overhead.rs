//! Overhead map overlay.
//!
//! Illustration only: draws the grid in the top-left corner, a line from the
//! player to every slice's hit point and a short facing indicator. Nothing
//! here feeds back into the ray caster.

use glam::Vec2;

use crate::{
    engine::{TrigTables, WallSlice},
    renderer::{Renderer, palette},
    world::{Camera, Cell, GridSource, TILE_SIZE},
};

/// Length of the facing indicator in screen pixels.
const FACING_LEN: f32 = 10.0;

/// `scale` is the on-screen size of one cell in pixels; 0 draws nothing.
pub fn draw_overhead<R, G>(
    r: &mut R,
    grid: &G,
    cam: &Camera,
    tables: &TrigTables,
    slices: &[WallSlice],
    scale: usize,
) where
    R: Renderer + ?Sized,
    G: GridSource + ?Sized,
{
    if scale == 0 {
        return;
    }
    let s = scale as i32;

    for v in 0..grid.height() {
        for u in 0..grid.width() {
            let color = match Cell::classify(grid.cell_at(u, v)) {
                Cell::Empty => palette::MAP_OPEN,
                _ => palette::MAP_SOLID,
            };
            r.fill_rect(u as i32 * s, v as i32 * s, s, s, color);
        }
    }

    let to_map = |p: Vec2| -> (i32, i32) {
        let m = p / TILE_SIZE * scale as f32;
        (m.x as i32, m.y as i32)
    };
    let (px, py) = to_map(cam.pos());

    for slice in slices {
        let (hx, hy) = to_map(slice.point);
        r.draw_line(px, py, hx, hy, palette::MAP_RAY);
    }

    let tip = Vec2::new(px as f32, py as f32) + cam.forward(tables) * FACING_LEN;
    r.draw_line(px, py, tip.x as i32, tip.y as i32, palette::MAP_FACING);
}
