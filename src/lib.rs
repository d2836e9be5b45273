//! Table-driven grid ray caster.
//!
//! [`engine::RayCaster`] turns a [`world::GridSource`] and a
//! [`world::Camera`] into one [`engine::WallSlice`] per rendered column;
//! a [`renderer::Renderer`] back-end turns the slices into pixels.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
