use glam::Mat4;
use rand::Rng;

use gameloop_camera::Camera;
use gameloop_objects::{GameObject, ObjectManager};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// Rendering is a read: it takes shared references and never changes
/// object or camera state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render a single object.
    fn render_object(&self, object: &GameObject) -> Self::Output;

    /// Render the camera's current state and view matrix.
    fn render_camera<R: Rng>(&self, camera: &Camera<R>) -> Self::Output;

    /// Render every active object in insertion order.
    fn render_all(&self, objects: &ObjectManager) -> Vec<Self::Output> {
        let _span = tracing::trace_span!("render_all", tick = objects.tick()).entered();
        objects.active().map(|o| self.render_object(o)).collect()
    }
}

/// Console text renderer.
///
/// Output is for people, not parsers; the exact layout may change.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn format_matrix(m: &Mat4) -> String {
    // Row-major so the translation shows up in the last column.
    let rows: Vec<String> = m
        .transpose()
        .to_cols_array_2d()
        .iter()
        .map(|r| format!("[{:.3} {:.3} {:.3} {:.3}]", r[0], r[1], r[2], r[3]))
        .collect();
    format!("[{}]", rows.join(", "))
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render_object(&self, object: &GameObject) -> String {
        let p = object.transform().position();
        format!(
            "{} is being rendered.\n{} Position: ({:.3}, {:.3})\n",
            object.name(),
            object.kind(),
            p.x,
            p.y
        )
    }

    fn render_camera<R: Rng>(&self, camera: &Camera<R>) -> String {
        let p = camera.position();
        format!(
            "Camera Position: ({:.3}, {:.3}), Rotation: {:.4}, Zoom: {:.4}\nView Matrix: {}\n",
            p.x,
            p.y,
            camera.rotation(),
            camera.zoom(),
            format_matrix(&camera.view_matrix())
        )
    }
}
