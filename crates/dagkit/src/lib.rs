#![forbid(unsafe_code)]

//! `dagkit` is a headless core for interactive DAG editors.
//!
//! It re-exports [`dagkit_core`] and, with the default `layered` feature, ships
//! [`LayeredLayout`]: a [`LayoutAdapter`] backed by the `dagkit-layout` engine.
//!
//! # Features
//!
//! - `layered`: enable the built-in layered layout (`dagkit::LayeredLayout`)

pub use dagkit_core::*;

#[cfg(feature = "layered")]
mod layered;

#[cfg(feature = "layered")]
pub use layered::LayeredLayout;

/// A canvas wired to the built-in layered layout, sized by `config.layout`.
#[cfg(feature = "layered")]
pub fn canvas(config: CanvasConfig) -> Canvas {
    let layout = LayeredLayout::new(config.layout);
    Canvas::new(config, Box::new(layout))
}
