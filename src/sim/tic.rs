use super::{InputCmd, systems};
use crate::engine::TrigTables;
use crate::world::{Camera, GridSource};
use std::time::{Duration, Instant};

pub const SIM_FPS: u32 = 35;
const TIC: Duration = Duration::from_micros(1_000_000 / SIM_FPS as u64);

/// Drives player movement at a fixed rate, independent of render speed.
pub struct TicRunner {
    last: Instant,
}

impl Default for TicRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TicRunner {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Advance enough tics to synchronise simulation with real time,
    /// applying `cmd` on each. Returns how many tics ran.
    pub fn pump<G: GridSource + ?Sized>(
        &mut self,
        cam: &mut Camera,
        grid: &G,
        tables: &TrigTables,
        cmd: InputCmd,
    ) -> u32 {
        let mut ran = 0;
        while self.last.elapsed() >= TIC {
            systems::player_input(cam, grid, tables, cmd);
            self.last += TIC;
            ran += 1;
        }
        ran
    }
}
