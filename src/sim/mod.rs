mod components;
mod systems;
mod tic;

pub use components::InputCmd;
pub use systems::{MOVE_SPEED, player_input, turn_rate};
pub use tic::{SIM_FPS, TicRunner};
