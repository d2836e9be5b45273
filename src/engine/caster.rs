//! ---------------------------------------------------------------------------
//! Column ray caster
//!
//! One ray per rendered column. Each ray runs two grid-DDA searches, one over
//! horizontal grid lines and one over vertical ones, keeps the closer hit,
//! removes the fisheye bow and projects the result into a [`WallSlice`].
//!
//! Searches step from grid line to grid line, so a ray that leaves the map
//! ends after at most `max(width, height) + 1` steps.
//! ---------------------------------------------------------------------------

use glam::{IVec2, Vec2};

use crate::{
    config::{ConfigError, RenderConfig},
    engine::{
        angle::{Arc, Arcs},
        tables::TrigTables,
        types::{Axis, Screen, WallHit, WallSlice},
    },
    renderer::palette,
    world::{Camera, GridSource, TILE_SIZE},
};

/// Owns the tables and the screen geometry; renders any number of frames.
#[derive(Clone, Debug)]
pub struct RayCaster {
    tables: TrigTables,
    screen: Screen,
    stride: usize,
}

impl RayCaster {
    /// Fails on the same geometry [`RenderConfig::validate`] rejects.
    pub fn new(screen: Screen, stride: usize) -> Result<Self, ConfigError> {
        RenderConfig {
            width: screen.w,
            height: screen.h,
            stride,
            minimap_scale: 0,
        }
        .validate()?;
        Ok(Self {
            tables: TrigTables::build(Arcs::for_width(screen.w)),
            screen,
            stride,
        })
    }

    pub fn from_config(cfg: &RenderConfig) -> Result<Self, ConfigError> {
        Self::new(Screen::new(cfg.width, cfg.height), cfg.stride)
    }

    #[inline]
    pub fn tables(&self) -> &TrigTables {
        &self.tables
    }

    #[inline]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /*──────────────────────────── frame ───────────────────────────────*/

    /// Cast every column left to right and collect the wall slices.
    ///
    /// `out` is cleared first and reused so steady-state frames don't
    /// allocate. Columns whose ray hits nothing produce no slice.
    pub fn render_frame<G: GridSource + ?Sized>(
        &self,
        grid: &G,
        cam: &Camera,
        out: &mut Vec<WallSlice>,
    ) {
        out.clear();
        let arcs = self.tables.arcs();
        let facing = arcs.wrap(cam.facing());
        let arcs_per_px = arcs.a60 / self.screen.w as Arc;

        for c in (0..self.screen.w).step_by(self.stride) {
            let offset = c as Arc * arcs_per_px - arcs.a30;
            let angle = arcs.wrap(facing + offset);

            if let Some(hit) = self.cast(grid, cam.pos(), angle) {
                let dist = hit.dist / self.tables.fish_eye(offset);
                out.push(self.project(c, &hit, dist, cam));
            }
        }
    }

    /// Closest wall along `angle` from `origin`, uncorrected distance.
    pub fn cast<G: GridSource + ?Sized>(
        &self,
        grid: &G,
        origin: Vec2,
        angle: Arc,
    ) -> Option<WallHit> {
        let angle = self.tables.arcs().wrap(angle);
        arbitrate(
            self.horizontal_hit(grid, origin, angle),
            self.vertical_hit(grid, origin, angle),
        )
    }

    /*──────────────────────── grid searches ───────────────────────────*/

    /// Walk the `y = k * TILE_SIZE` crossings.
    pub fn horizontal_hit<G: GridSource + ?Sized>(
        &self,
        grid: &G,
        o: Vec2,
        angle: Arc,
    ) -> Option<WallHit> {
        let t = &self.tables;
        let arcs = t.arcs();
        let angle = arcs.wrap(angle);
        // parallel to the lines: never crosses one
        if angle == 0 || angle == arcs.a180 {
            return None;
        }

        let row0 = (o.y / TILE_SIZE).floor();
        let (mut line_y, dy, mut row, drow) = if arcs.facing_down(angle) {
            ((row0 + 1.0) * TILE_SIZE, TILE_SIZE, row0 as i64 + 1, 1)
        } else {
            // the cell above the line is the one being entered
            (row0 * TILE_SIZE, -TILE_SIZE, row0 as i64 - 1, -1)
        };
        let mut x = t.inv_tan(angle) * (line_y - o.y) + o.x;
        let x_step = t.x_step(angle);

        loop {
            let col = cell_index(x)?;
            let cell = grid.cell(col, row)?;
            if cell.is_solid() {
                return Some(WallHit {
                    axis: Axis::Horizontal,
                    cell: IVec2::new(col as i32, row as i32),
                    point: Vec2::new(x, line_y),
                    dist: (x - o.x) * t.inv_cos(angle),
                    kind: cell,
                });
            }
            x += x_step;
            line_y += dy;
            row += drow;
        }
    }

    /// Walk the `x = k * TILE_SIZE` crossings.
    pub fn vertical_hit<G: GridSource + ?Sized>(
        &self,
        grid: &G,
        o: Vec2,
        angle: Arc,
    ) -> Option<WallHit> {
        let t = &self.tables;
        let arcs = t.arcs();
        let angle = arcs.wrap(angle);
        if angle == arcs.a90 || angle == arcs.a270 {
            return None;
        }

        let col0 = (o.x / TILE_SIZE).floor();
        let (mut line_x, dx, mut col, dcol) = if arcs.facing_right(angle) {
            ((col0 + 1.0) * TILE_SIZE, TILE_SIZE, col0 as i64 + 1, 1)
        } else {
            (col0 * TILE_SIZE, -TILE_SIZE, col0 as i64 - 1, -1)
        };
        let mut y = t.tan(angle) * (line_x - o.x) + o.y;
        let y_step = t.y_step(angle);

        loop {
            let row = cell_index(y)?;
            let cell = grid.cell(col, row)?;
            if cell.is_solid() {
                return Some(WallHit {
                    axis: Axis::Vertical,
                    cell: IVec2::new(col as i32, row as i32),
                    point: Vec2::new(line_x, y),
                    dist: (y - o.y) * t.inv_sin(angle),
                    kind: cell,
                });
            }
            y += y_step;
            line_x += dx;
            col += dcol;
        }
    }

    /*──────────────────────── projection ──────────────────────────────*/

    /// Turn a corrected distance into a clipped slice for column `c`.
    fn project(&self, c: usize, hit: &WallHit, dist: f32, cam: &Camera) -> WallSlice {
        let sprite = hit.is_sprite();
        let wall_h = if sprite { TILE_SIZE * 0.5 } else { TILE_SIZE };

        // saturating float→int keeps a zero distance from overflowing
        let h = (wall_h * cam.projection_distance() / dist) as i64;
        let h = h.clamp(0, i32::MAX as i64);
        let screen_h = self.screen.h as i64;

        let bottom = cam.vertical_center() as i64 + h / 2;
        let top = screen_h - bottom;
        let end = top + h;

        WallSlice {
            x: c,
            w: self.stride.min(self.screen.w - c),
            top: top.clamp(0, screen_h) as i32,
            bottom: end.clamp(0, screen_h) as i32,
            color: palette::wall_color(hit.kind, hit.axis),
            sprite,
            axis: hit.axis,
            dist,
            point: hit.point,
        }
    }
}

/// Horizontal result only wins when strictly closer.
#[inline]
pub fn arbitrate(h: Option<WallHit>, v: Option<WallHit>) -> Option<WallHit> {
    match (h, v) {
        (Some(h), Some(v)) if h.dist < v.dist => Some(h),
        (Some(h), None) => Some(h),
        (_, v) => v,
    }
}

/// World coordinate → cell index; `None` for inf/NaN.
#[inline(always)]
fn cell_index(v: f32) -> Option<i64> {
    v.is_finite().then(|| (v / TILE_SIZE).floor() as i64)
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        renderer::palette::{SPRITE, WALL_GREY, WALL_GREY_DARK},
        world::{Cell, TileMap},
    };

    const W: usize = 640;
    const H: usize = 400;

    fn caster() -> RayCaster {
        RayCaster::new(Screen::new(W, H), 5).unwrap()
    }

    fn camera_at(rc: &RayCaster, x: f32, y: f32, facing: Arc) -> Camera {
        Camera::for_screen(Vec2::new(x, y), facing, rc.screen())
    }

    #[test]
    fn enclosed_room_every_column_hits() {
        let rc = caster();
        let map = TileMap::enclosed(3, 3);
        let cam = camera_at(&rc, 96.0, 96.0, 0);
        let mut out = Vec::new();
        rc.render_frame(&map, &cam, &mut out);

        assert_eq!(out.len(), W / 5);
        for s in &out {
            assert!(s.dist.is_finite() && s.dist > 0.0, "column {} dist {}", s.x, s.dist);
            assert!(s.height() > 0);
            assert!(!s.sprite);
        }
        // straight ahead: vertical wall line x = 128, 32 units away
        let centre = out.iter().find(|s| s.x == W / 2).unwrap();
        assert_eq!(centre.axis, Axis::Vertical);
        assert!((centre.dist - 32.0).abs() < 0.1);
        assert_eq!(centre.color, WALL_GREY_DARK);
    }

    #[test]
    fn degenerate_axis_angles_short_circuit() {
        let rc = caster();
        let map = TileMap::enclosed(3, 3);
        let o = Vec2::new(96.0, 96.0);
        let a = *rc.tables().arcs();

        assert!(rc.horizontal_hit(&map, o, 0).is_none());
        assert!(rc.horizontal_hit(&map, o, a.a180).is_none());
        assert!(rc.vertical_hit(&map, o, a.a90).is_none());
        assert!(rc.vertical_hit(&map, o, a.a270).is_none());
        assert!(rc.horizontal_hit(&map, o, a.a180 - 2 * a.a360).is_none());
        assert!(rc.vertical_hit(&map, o, a.a90 + a.a360).is_none());
        assert!(rc.vertical_hit(&map, o, -a.a90).is_none());

        // the other family still finds the wall
        let down = rc.cast(&map, o, a.a90).unwrap();
        assert_eq!(down.axis, Axis::Horizontal);
        assert_eq!(down.cell, IVec2::new(1, 2));
        assert_eq!(down.kind, Cell::Wall(1));
        assert!((down.dist - 32.0).abs() < 0.1);

        let up = rc.cast(&map, o, a.a270).unwrap();
        assert_eq!(up.cell, IVec2::new(1, 0));
        let left = rc.cast(&map, o, a.a180).unwrap();
        assert_eq!(left.axis, Axis::Vertical);
        assert_eq!(left.cell, IVec2::new(0, 1));

        let cam = camera_at(&rc, 96.0, 96.0, a.a90);
        let mut out = Vec::new();
        rc.render_frame(&map, &cam, &mut out);
        assert_eq!(out.len(), W / 5);
    }

    #[test]
    fn sprite_hit_is_half_height() {
        let rc = caster();
        let mut map = TileMap::enclosed(5, 3);
        let cam = camera_at(&rc, 96.0, 96.0, 0);
        let mut out = Vec::new();

        map.set(3, 1, 1);
        rc.render_frame(&map, &cam, &mut out);
        let wall = *out.iter().find(|s| s.x == W / 2).unwrap();

        map.set(3, 1, 3);
        rc.render_frame(&map, &cam, &mut out);
        let sprite = *out.iter().find(|s| s.x == W / 2).unwrap();

        assert_eq!(sprite.axis, Axis::Vertical);
        assert!(sprite.sprite);
        assert_eq!(sprite.color, SPRITE);
        assert_ne!(sprite.color, WALL_GREY_DARK);
        // both hit the line x = 192, 96 units out
        assert!((sprite.dist - wall.dist).abs() < 0.1);
        assert!((wall.height() / 2 - sprite.height()).abs() <= 1);
    }

    #[test]
    fn reserved_codes_let_rays_through() {
        let rc = caster();
        let mut map = TileMap::enclosed(5, 3);
        map.set(2, 1, 7);
        let hit = rc.cast(&map, Vec2::new(96.0, 96.0), 0).unwrap();
        assert_eq!(hit.cell, IVec2::new(4, 1));
    }

    #[test]
    fn rays_leaving_the_grid_terminate() {
        let rc = caster();
        let open = TileMap::from_rows(vec![vec![0; 3]; 3]).unwrap();
        let a = *rc.tables().arcs();
        for angle in (0..a.a360).step_by(7) {
            assert!(rc.cast(&open, Vec2::new(2.0, 96.0), angle).is_none());
        }

        // standing on the edge looking out
        let cam = camera_at(&rc, 1.0, 96.0, a.a180);
        let mut out = Vec::new();
        rc.render_frame(&open, &cam, &mut out);
        assert!(out.is_empty());

        // origin outside the grid entirely
        assert!(rc.cast(&open, Vec2::new(-500.0, -500.0), a.a30).is_none());
    }

    /// Counts every cell lookup a search makes.
    struct Counting<'a> {
        inner: &'a TileMap,
        reads: std::cell::Cell<usize>,
    }

    impl GridSource for Counting<'_> {
        fn width(&self) -> usize {
            self.inner.width()
        }
        fn height(&self) -> usize {
            self.inner.height()
        }
        fn cell_at(&self, x: usize, y: usize) -> i32 {
            self.reads.set(self.reads.get() + 1);
            self.inner.cell_at(x, y)
        }
    }

    #[test]
    fn open_grid_search_steps_are_bounded() {
        let rc = caster();
        let open = TileMap::from_rows(vec![vec![0; 7]; 5]).unwrap();
        let bound = open.width().max(open.height()) + 1;
        let a = *rc.tables().arcs();
        for angle in (0..a.a360).step_by(3) {
            for o in [Vec2::new(2.0, 2.0), Vec2::new(224.0, 160.0), Vec2::new(446.0, 318.0)] {
                let grid = Counting {
                    inner: &open,
                    reads: std::cell::Cell::new(0),
                };
                assert!(rc.horizontal_hit(&grid, o, angle).is_none());
                let h = grid.reads.replace(0);
                assert!(rc.vertical_hit(&grid, o, angle).is_none());
                let v = grid.reads.get();
                assert!(h <= bound && v <= bound, "angle {angle} from {o}: {h}/{v} reads");
            }
        }
    }

    #[test]
    fn rejects_unusable_geometry() {
        assert_eq!(
            RayCaster::new(Screen::new(641, H), 5).unwrap_err(),
            ConfigError::OddWidth(641)
        );
        assert_eq!(
            RayCaster::new(Screen::new(0, H), 5).unwrap_err(),
            ConfigError::ZeroWidth
        );
        assert_eq!(
            RayCaster::new(Screen::new(W, H), 0).unwrap_err(),
            ConfigError::BadStride { stride: 0, width: W }
        );
        let cfg = RenderConfig {
            width: 641,
            ..RenderConfig::default()
        };
        assert_eq!(RayCaster::from_config(&cfg).unwrap_err(), ConfigError::OddWidth(641));

        let rc = RayCaster::from_config(&RenderConfig::default()).unwrap();
        let arcs = rc.tables().arcs();
        assert_eq!(arcs.a360, 2 * arcs.a180);
        // just below a full turn points slightly up, not down
        assert!(rc.tables().sin(arcs.a360 - 1) < 0.0);
    }

    #[test]
    fn rendering_is_deterministic() {
        let rc = caster();
        let map = TileMap::demo();
        let cam = camera_at(&rc, 100.0, 90.0, 1234);
        let (mut a, mut b) = (Vec::new(), Vec::new());
        rc.render_frame(&map, &cam, &mut a);
        rc.render_frame(&map, &cam, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn facing_is_normalised() {
        let rc = caster();
        let map = TileMap::demo();
        let a360 = rc.tables().arcs().a360;
        let (mut a, mut b) = (Vec::new(), Vec::new());
        rc.render_frame(&map, &camera_at(&rc, 100.0, 90.0, 100), &mut a);
        rc.render_frame(&map, &camera_at(&rc, 100.0, 90.0, 100 - 2 * a360), &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn fisheye_flattens_a_straight_wall() {
        let rc = caster();
        // wall line x = 192 spans the whole view
        let map = TileMap::enclosed(4, 5);
        let cam = camera_at(&rc, 96.0, 160.0, 0);
        let mut out = Vec::new();
        rc.render_frame(&map, &cam, &mut out);
        for s in out.iter().filter(|s| s.axis == Axis::Vertical) {
            assert!((s.dist - 96.0).abs() < 0.5, "column {} dist {}", s.x, s.dist);
        }
    }

    #[test]
    fn arbitration_prefers_vertical_on_tie() {
        let hit = |axis, dist| WallHit {
            axis,
            cell: IVec2::ZERO,
            point: Vec2::ZERO,
            dist,
            kind: Cell::Wall(1),
        };
        let h = hit(Axis::Horizontal, 10.0);
        let v = hit(Axis::Vertical, 10.0);
        assert_eq!(arbitrate(Some(h), Some(v)).unwrap().axis, Axis::Vertical);
        assert_eq!(
            arbitrate(Some(hit(Axis::Horizontal, 9.0)), Some(v)).unwrap().axis,
            Axis::Horizontal
        );
        assert_eq!(arbitrate(Some(h), None).unwrap().axis, Axis::Horizontal);
        assert_eq!(arbitrate(None, Some(v)).unwrap().axis, Axis::Vertical);
        assert!(arbitrate(None, None).is_none());
    }

    #[test]
    fn horizontal_hits_use_light_shade() {
        let rc = caster();
        let map = TileMap::enclosed(3, 3);
        let a = *rc.tables().arcs();
        let cam = camera_at(&rc, 96.0, 96.0, a.a90);
        let mut out = Vec::new();
        rc.render_frame(&map, &cam, &mut out);
        let centre = out.iter().find(|s| s.x == W / 2).unwrap();
        assert_eq!(centre.axis, Axis::Horizontal);
        assert_eq!(centre.color, WALL_GREY);
    }

    #[test]
    fn slices_stay_on_screen() {
        let rc = caster();
        let map = TileMap::enclosed(3, 3);
        // hugging the wall: projected height is far taller than the screen
        let cam = camera_at(&rc, 65.0, 96.0, rc.tables().arcs().a180);
        let mut out = Vec::new();
        rc.render_frame(&map, &cam, &mut out);
        for s in &out {
            assert!(s.top >= 0 && s.bottom <= H as i32 && s.top <= s.bottom);
            assert!(s.x + s.w <= W);
        }
        assert!(out.iter().any(|s| s.top == 0 && s.bottom == H as i32));
    }
}
