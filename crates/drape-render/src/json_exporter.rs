//! JSON frame exporter.
//!
//! Captures the index list once and the positions of every frame, then
//! writes the whole animation as one JSON document on `finalize()`.

use std::path::{Path, PathBuf};

use drape_mesh::TriangleMesh;
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::renderer::{RenderFrame, Renderer};

/// One captured frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameData {
    pub frame: u32,
    pub sim_time: f64,
    /// Interleaved [x0,y0,z0, x1,y1,z1, ...]
    pub positions: Vec<f32>,
}

/// Complete animation as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub indices: Vec<u32>,
    pub frames: Vec<FrameData>,
}

impl AnimationData {
    /// Reads an animation previously written by [`JsonFrameExporter`].
    pub fn load(path: impl AsRef<Path>) -> DrapeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| DrapeError::Serialization(e.to_string()))
    }
}

/// Exports simulation frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("frames.json");
/// exporter.init(cloth.rest_mesh())?;
/// // once per frame: exporter.submit_frame(&frame)?;
/// exporter.finalize()?;
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    data: AnimationData,
}

impl JsonFrameExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            data: AnimationData::default(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Serializes everything captured so far.
    pub fn to_json(&self) -> DrapeResult<String> {
        serde_json::to_string(&self.data)
            .map_err(|e| DrapeError::Serialization(format!("JSON serialization failed: {e}")))
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, mesh: &TriangleMesh) -> DrapeResult<()> {
        self.data.vertex_count = mesh.vertex_count();
        self.data.triangle_count = mesh.triangle_count();
        self.data.indices = mesh.indices.clone();
        self.data.frames.clear();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> DrapeResult<()> {
        if frame.vertex_count() != self.data.vertex_count {
            return Err(DrapeError::InvalidMesh(format!(
                "frame has {} vertices, mesh has {}",
                frame.vertex_count(),
                self.data.vertex_count
            )));
        }
        self.data.frames.push(FrameData {
            frame: frame.frame,
            sim_time: frame.sim_time,
            positions: frame.positions.clone(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> DrapeResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.data.frames.len() as u32
    }
}
