use custom_error::custom_error;

use neuroview_core::models::Framebuffer;

use crate::scene::scene::Scene;

custom_error! {pub RenderError
    IndexOutOfRange {description: String} = "Vertex index out of range: {description}",
    BufferMismatch {description: String} = "Mismatched buffer sizes: {description}",
}

/// Per-frame view state: cumulative drag rotation (degrees) and the
/// clip-plane offset along the X axis.
pub struct ViewParams {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub slice_offset: f64,
}

pub trait Render {

    fn render(&self, scene: &Scene, view: &ViewParams, render_to: &mut Framebuffer) -> Result<(), RenderError>;
}
