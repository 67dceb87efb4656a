use neuroview_core::models::{Framebuffer, Pixel};

use crate::geometry::matrix::Matrix44;
use crate::geometry::vector3::Vector3;
use crate::materials::material::{reflect, Material};
use crate::objects::mesh_object::MeshObject;
use crate::render::render::{Render, RenderError, ViewParams};
use crate::render::staging::StagedBuffers;
use crate::scene::light::Light;
use crate::scene::scene::Scene;

/// Wireframe overlay color (lighting is off for the overlay pass).
const EDGE_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

/// Edge fragments are nudged toward the viewer so they survive the strict
/// depth test against the fill pass of the same triangles.
const EDGE_DEPTH_BIAS: f64 = 0.05;

/// Software rasterizer implementing the two-pass translucent-over-opaque
/// frame: clear, blend on, depth writes off for the translucent primary
/// object, depth writes back on for the remaining opaque objects, with an
/// X-axis clip plane applied to every pass.
pub struct RasterRender {
}

impl RasterRender {

    pub fn new() -> Self {
        Self {
        }
    }

    fn render_mesh(
        &self,
        object: &MeshObject,
        model: &Matrix44,
        scene: &Scene,
        clip: Option<f64>,
        target: &mut Framebuffer,
    ) -> Result<(), RenderError> {
        let staged = StagedBuffers::stage(object.vertices(), object.normals(), object.faces())?;
        let camera = scene.camera();

        // Transform, project and light every staged vertex once; triangles
        // then interpolate the results.
        let mut shaded: Vec<Option<ScreenVertex>> = Vec::with_capacity(staged.vertex_count());
        for index in 0..staged.vertex_count() {
            let object_position = staged.vertex(index);
            let world = model.transform_point(&object_position);

            shaded.push(camera.project_to_screen(&world, target.width(), target.height())
                .map(|(x, y, depth)| {
                    let normal = model.transform_vector(&staged.normal(index)).normalized();
                    let color = shade(&camera.to_view(&world), &normal, scene.lights(), object.material());

                    ScreenVertex {
                        x,
                        y,
                        depth,
                        color,
                        object_x: object_position.x,
                    }
                }));
        }

        let alpha = object.material().alpha();
        for triangle in 0..staged.triangle_count() {
            let [i0, i1, i2] = staged.triangle(triangle);
            if let (Some(a), Some(b), Some(c)) = (
                &shaded[i0 as usize],
                &shaded[i1 as usize],
                &shaded[i2 as usize],
            ) {
                fill_triangle(target, [a, b, c], alpha, clip);
            }
        }

        if object.draw_edges() {
            // Line-mode pass over the same triangles, unlit.
            for triangle in 0..staged.triangle_count() {
                let [i0, i1, i2] = staged.triangle(triangle);
                if let (Some(a), Some(b), Some(c)) = (
                    &shaded[i0 as usize],
                    &shaded[i1 as usize],
                    &shaded[i2 as usize],
                ) {
                    draw_edge(target, a, b, clip);
                    draw_edge(target, b, c, clip);
                    draw_edge(target, c, a, clip);
                }
            }
        }

        Ok(())
    }
}

impl Render for RasterRender {

    fn render(&self, scene: &Scene, view: &ViewParams, render_to: &mut Framebuffer) -> Result<(), RenderError> {
        render_to.clear(Pixel::black());
        render_to.set_blend(true);
        render_to.set_depth_write(false);

        let objects = scene.objects();
        if objects.is_empty() {
            return Ok(());
        }

        // Rotation pivots on the primary object's centroid; the clip plane
        // follows the object (its offset is in unrotated object space).
        let model = Matrix44::pivot_rotation(objects[0].centroid(), view.rotation_x, view.rotation_y);
        let clip = Some(view.slice_offset);

        self.render_mesh(&objects[0], &model, scene, clip, render_to)?;

        render_to.set_depth_write(true);
        for object in &objects[1..] {
            self.render_mesh(object, &model, scene, clip, render_to)?;
        }

        Ok(())
    }
}

struct ScreenVertex {
    x: f64,
    y: f64,
    depth: f64,
    color: [f64; 3],
    object_x: f64,
}

/// Per-vertex ambient + diffuse + specular shading in view space, with the
/// eye at the origin.
fn shade(position: &Vector3, normal: &Vector3, lights: &[Light], material: &Material) -> [f64; 3] {
    let mut color = [0.0; 3];
    let to_eye = (-*position).normalized();

    for light in lights {
        let to_light = (light.position() - position).normalized();
        let diffuse_intensity = normal.dot_product(&to_light).max(0.0);

        let specular_intensity = if diffuse_intensity > 0.0 {
            let reflected = reflect(&-to_light, normal);
            reflected.dot_product(&to_eye).max(0.0).powf(material.shininess)
        } else {
            0.0
        };

        for channel in 0..3 {
            color[channel] += material.diffuse[channel]
                * (light.ambient()[channel] + light.diffuse()[channel] * diffuse_intensity)
                + material.specular[channel] * light.specular()[channel] * specular_intensity;
        }
    }

    for channel in color.iter_mut() {
        *channel = channel.min(1.0);
    }
    color
}

fn clipped(clip: Option<f64>, object_x: f64) -> bool {
    match clip {
        Some(offset) => object_x > offset,
        None => false,
    }
}

fn fill_triangle(target: &mut Framebuffer, corners: [&ScreenVertex; 3], alpha: f64, clip: Option<f64>) {
    let (v0, v1, v2) = (corners[0], corners[1], corners[2]);

    let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i64).max(0);
    let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i64).min(target.width() as i64 - 1);
    let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i64).max(0);
    let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i64).min(target.height() as i64 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f64 + 0.5;
            let py = y as f64 + 0.5;

            let weights = match barycentric((v0.x, v0.y), (v1.x, v1.y), (v2.x, v2.y), (px, py)) {
                Some(weights) => weights,
                None => continue,
            };
            let (w0, w1, w2) = weights;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let object_x = w0 * v0.object_x + w1 * v1.object_x + w2 * v2.object_x;
            if clipped(clip, object_x) {
                continue;
            }

            let depth = w0 * v0.depth + w1 * v1.depth + w2 * v2.depth;
            let color = [
                w0 * v0.color[0] + w1 * v1.color[0] + w2 * v2.color[0],
                w0 * v0.color[1] + w1 * v1.color[1] + w2 * v2.color[1],
                w0 * v0.color[2] + w1 * v1.color[2] + w2 * v2.color[2],
                alpha,
            ];

            target.plot_fragment(x as usize, y as usize, depth, color);
        }
    }
}

fn draw_edge(target: &mut Framebuffer, from: &ScreenVertex, to: &ScreenVertex, clip: Option<f64>) {
    let steps = ((to.x - from.x).abs().max((to.y - from.y).abs()).ceil() as usize).max(1);

    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = from.x + (to.x - from.x) * t;
        let y = from.y + (to.y - from.y) * t;
        if x < -0.5 || y < -0.5 {
            continue;
        }

        let object_x = from.object_x + (to.object_x - from.object_x) * t;
        if clipped(clip, object_x) {
            continue;
        }

        let depth = from.depth + (to.depth - from.depth) * t - EDGE_DEPTH_BIAS;
        target.plot_fragment(
            x.round() as usize,
            y.round() as usize,
            depth,
            [EDGE_COLOR[0], EDGE_COLOR[1], EDGE_COLOR[2], 1.0],
        );
    }
}

/// Barycentric coordinates of `p` in the screen-space triangle, or `None`
/// for a (near-)degenerate screen footprint.
fn barycentric(
    v0: (f64, f64),
    v1: (f64, f64),
    v2: (f64, f64),
    p: (f64, f64),
) -> Option<(f64, f64, f64)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-9 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
