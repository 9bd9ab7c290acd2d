//! Integration tests for drape-render.

use drape_math::Vec3;
use drape_mesh::generators::cloth_grid;
use drape_mesh::{GridDimensions, TriangleMesh};
use drape_render::{AnimationData, HeadlessRenderer, JsonFrameExporter, RenderFrame, Renderer};

fn mesh() -> TriangleMesh {
    let dims = GridDimensions::new(3, 3, 1.0, 1.0).unwrap();
    cloth_grid(&dims, Vec3::ZERO)
}

// ─── Headless ─────────────────────────────────────────────────

#[test]
fn headless_init() {
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&mesh()).unwrap();
    assert_eq!(renderer.name(), "headless");
    assert_eq!(renderer.frame_count(), 0);
}

#[test]
fn headless_submit_frames() {
    let mesh = mesh();
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&mesh).unwrap();

    let frame = RenderFrame::from_positions(1, 0.0, &mesh.positions);
    renderer.submit_frame(&frame).unwrap();
    renderer.submit_frame(&frame).unwrap();
    renderer.finalize().unwrap();
    assert_eq!(renderer.frame_count(), 2);
}

#[test]
fn render_frame_from_positions() {
    let frame = RenderFrame::from_positions(
        42,
        1.5,
        &[Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)],
    );
    assert_eq!(frame.frame, 42);
    assert_eq!(frame.vertex_count(), 2);
    assert_eq!(frame.positions, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

// ─── JSON Exporter ────────────────────────────────────────────

#[test]
fn exporter_writes_indices_once() {
    let mesh = mesh();
    let path = std::env::temp_dir().join(format!("drape_render_{}.json", std::process::id()));
    let mut exporter = JsonFrameExporter::new(&path);
    exporter.init(&mesh).unwrap();

    for f in 1..=3 {
        let moved: Vec<Vec3> = mesh.positions.iter().map(|p| *p - Vec3::Y * f as f32).collect();
        exporter
            .submit_frame(&RenderFrame::from_positions(f, f as f64 / 24.0, &moved))
            .unwrap();
    }
    assert_eq!(exporter.frame_count(), 3);
    exporter.finalize().unwrap();

    let data = AnimationData::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(data.vertex_count, 9);
    assert_eq!(data.triangle_count, 8);
    assert_eq!(data.indices, mesh.indices);
    assert_eq!(data.frames.len(), 3);
    assert_eq!(data.frames[2].frame, 3);
    assert!((data.frames[2].positions[1] + 3.0).abs() < 1e-6);
}

#[test]
fn exporter_rejects_wrong_vertex_count() {
    let mut exporter = JsonFrameExporter::new("unused.json");
    exporter.init(&mesh()).unwrap();
    let frame = RenderFrame::from_positions(1, 0.0, &[Vec3::ZERO; 2]);
    assert!(exporter.submit_frame(&frame).is_err());
    assert_eq!(exporter.frame_count(), 0);
}

#[test]
fn exporter_json_in_memory() {
    let mut exporter = JsonFrameExporter::new("unused.json");
    exporter.init(&mesh()).unwrap();
    let json = exporter.to_json().unwrap();
    assert!(json.contains("\"indices\""));
    assert_eq!(exporter.name(), "json_exporter");
}
