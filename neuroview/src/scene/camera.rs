use crate::geometry::vector3::Vector3;

/// Perspective camera at the origin looking down -Z, with a fixed view
/// translation standing in for camera placement.
pub struct Camera {

    field_of_view: f64,
    aspect: f64,
    near: f64,
    far: f64,
    view_translation: Vector3,
}

impl Camera {

    pub fn new(field_of_view: f64, aspect: f64, near: f64, far: f64, view_translation: Vector3) -> Self {
        Self {
            field_of_view,
            aspect,
            near,
            far,
            view_translation,
        }
    }

    /// World point to view space.
    pub fn to_view(&self, point: &Vector3) -> Vector3 {
        point + &self.view_translation
    }

    /// Project a world-space point to pixel coordinates plus a view-space
    /// depth. Returns `None` when the point falls outside the near/far
    /// range.
    pub fn project_to_screen(
        &self,
        point: &Vector3,
        width: usize,
        height: usize,
    ) -> Option<(f64, f64, f64)> {
        let view = self.to_view(point);
        let depth = -view.z;
        if depth < self.near || depth > self.far {
            return None;
        }

        let focal = 1.0 / (self.field_of_view.to_radians() / 2.0).tan();
        let ndc_x = focal / self.aspect * view.x / depth;
        let ndc_y = focal * view.y / depth;

        let screen_x = (ndc_x + 1.0) * 0.5 * width as f64;
        let screen_y = (1.0 - ndc_y) * 0.5 * height as f64;

        Some((screen_x, screen_y, depth))
    }
}
