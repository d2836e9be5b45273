use glam::Vec2;

use crate::engine::{Arc, Arcs, Screen, TrigTables};
use crate::world::grid::GridSource;

/// Player view-point on the tile grid.
///
/// * `pos` is in world units (one cell = `TILE_SIZE`).
/// * `facing` is in arcs, 0 = +x, growing towards +y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub facing: Arc,
    pub proj_dist: f32, // distance to the projection plane
    pub y_center: i32,  // screen row walls are balanced around
}

impl Camera {
    pub fn new(pos: Vec2, facing: Arc, proj_dist: f32, y_center: i32) -> Self {
        Self {
            pos,
            facing,
            proj_dist,
            y_center,
        }
    }

    /// Camera whose projection plane exactly spans a 60° view of `screen`.
    ///
    /// ```text
    /// proj_dist = (w / 2) / tan(30°)
    /// ```
    pub fn for_screen(pos: Vec2, facing: Arc, screen: &Screen) -> Self {
        let proj_dist = screen.half_w / 30f32.to_radians().tan();
        Self::new(pos, facing, proj_dist, screen.half_h as i32)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn facing(&self) -> Arc {
        self.facing
    }

    #[inline]
    pub fn projection_distance(&self) -> f32 {
        self.proj_dist
    }

    #[inline]
    pub fn vertical_center(&self) -> i32 {
        self.y_center
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Unit vector along `facing`, read from the tables.
    #[inline]
    pub fn forward(&self, tables: &TrigTables) -> Vec2 {
        Vec2::new(tables.cos(self.facing), tables.sin(self.facing))
    }

    /// Rotate by `delta` arcs (positive = towards +y), keeping `facing`
    /// inside `[0, a360)`.
    pub fn turn(&mut self, delta: Arc, arcs: &Arcs) {
        self.facing = arcs.wrap(self.facing + delta);
    }

    /// Move `distance` units along `facing` (negative = backwards).
    ///
    /// The move is refused when the destination cell is off the grid or not
    /// walkable. Returns whether the camera moved.
    pub fn walk<G: GridSource + ?Sized>(
        &mut self,
        distance: f32,
        grid: &G,
        tables: &TrigTables,
    ) -> bool {
        let target = self.pos + self.forward(tables) * distance;
        match grid.cell_at_world(target) {
            Some(cell) if cell.is_walkable() => {
                self.pos = target;
                true
            }
            _ => false,
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
