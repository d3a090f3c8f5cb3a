//! Render-side data
//!
//! The crate does not talk to a graphics API. It hands the external renderer a
//! draw list: per object a mesh name, an object id for shading and a model
//! matrix, plus a `#[repr(C)]` record that can be uploaded as-is.

pub mod instance;
pub mod scene;

pub use instance::{InstanceRaw, RenderInstance};
pub use scene::build as build_scene;
