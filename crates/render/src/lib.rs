//! Rendering adapter: projects the hex world into renderer-agnostic output.
//!
//! # Invariants
//! - Renderers never mutate the world; grids are owned by the caller.
//! - Render output derives only from world state and view.
//!
//! GPU backends consume `DrawCommand`s and resolve each `ModelKey` to a
//! pre-loaded drawable; model loading itself lives outside this crate.

mod layout;
mod renderer;

pub use layout::HexLayout;
pub use renderer::{
    DebugTextRenderer, DrawCommand, DrawListRenderer, ModelKey, RenderView, Renderer,
};

pub fn crate_info() -> &'static str {
    "hexworld-render v0.1.0"
}
