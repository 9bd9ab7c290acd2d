//! Renderer trait and the headless implementation.

use drape_math::{interleave, Vec3};
use drape_mesh::TriangleMesh;
use drape_types::DrapeResult;

/// Particle positions for one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Frame index (1-based in the frame loop).
    pub frame: u32,
    /// Simulated time at this frame (seconds).
    pub sim_time: f64,
    /// Interleaved positions `[x0, y0, z0, x1, ...]`.
    pub positions: Vec<f32>,
}

impl RenderFrame {
    /// Copies positions into a new frame.
    pub fn from_positions(frame: u32, sim_time: f64, positions: &[Vec3]) -> Self {
        Self {
            frame,
            sim_time,
            positions: interleave(positions),
        }
    }

    /// Number of particles in this frame.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Trait for presenting simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`] — Counts frames and discards them (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter) — Writes all frames to one JSON file
pub trait Renderer: Send {
    /// Receives the mesh topology once, before any frame.
    fn init(&mut self, mesh: &TriangleMesh) -> DrapeResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame) -> DrapeResult<()>;

    /// Flush buffers, close files.
    fn finalize(&mut self) -> DrapeResult<()>;

    fn name(&self) -> &str;

    /// Frames submitted so far.
    fn frame_count(&self) -> u32;
}

/// Renderer that counts frames and discards them.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u32,
    vertex_count: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, mesh: &TriangleMesh) -> DrapeResult<()> {
        self.vertex_count = mesh.vertex_count();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> DrapeResult<()> {
        debug_assert_eq!(frame.vertex_count(), self.vertex_count);
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> DrapeResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
