//! # drape-render
//!
//! Read-only rendering boundary for Drape.
//!
//! A [`Renderer`] receives the triangle index list once and then a copy of
//! the particle positions once per frame. It never writes back into the
//! simulation.

pub mod json_exporter;
pub mod renderer;

pub use json_exporter::{AnimationData, JsonFrameExporter};
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
