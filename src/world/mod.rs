mod camera;
mod grid;

pub use camera::Camera;

pub use grid::{Cell, GridError, GridSource, TILE_SIZE, TileMap};
