use crate::{
    engine::TrigTables,
    sim::InputCmd,
    world::{Camera, GridSource},
};

/// World units walked per tic at full forward input.
pub const MOVE_SPEED: f32 = 8.0;

/// Arcs turned per tic at full turn input: a tenth of five degrees, at
/// least one arc so tiny screens still turn.
#[inline]
pub fn turn_rate(tables: &TrigTables) -> i32 {
    (tables.arcs().a5 / 10).max(1)
}

/// Apply one tic of input: turn first, then try to walk.
///
/// Returns whether the camera changed position.
pub fn player_input<G: GridSource + ?Sized>(
    cam: &mut Camera,
    grid: &G,
    tables: &TrigTables,
    cmd: InputCmd,
) -> bool {
    /* 1. turn */
    if cmd.turn != 0.0 {
        let delta = (cmd.turn.clamp(-1.0, 1.0) * turn_rate(tables) as f32).round() as i32;
        cam.turn(delta, tables.arcs());
    }

    /* 2. walk, refused when the target cell is occupied */
    if cmd.forward != 0.0 {
        return cam.walk(cmd.forward.clamp(-1.0, 1.0) * MOVE_SPEED, grid, tables);
    }
    false
}
