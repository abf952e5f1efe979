//! Canvas 2D rendering module
//!
//! Drawing is a thin layer over the simulation state; color math lives in
//! `palette` so it can be tested without a browser.

pub mod palette;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
