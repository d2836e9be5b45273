pub mod angle;
pub mod caster;
pub mod tables;
pub mod types;

pub use angle::{Arc, Arcs};
pub use caster::{RayCaster, arbitrate};
pub use tables::{ANGLE_EPSILON, TrigTables};
pub use types::{Axis, Screen, WallHit, WallSlice};
