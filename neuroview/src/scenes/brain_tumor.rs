use std::collections::HashMap;

use crate::geometry::vector3::Vector3;
use crate::io::traits::{MeshLoader, NeuroviewIOError};
use crate::materials::material::Material;
use crate::objects::mesh_object::MeshObject;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::scene::Scene;
use crate::scenes::provider::SceneProvider;

pub const BRAIN_PATH_OPTION: &str = "brain";
pub const TUMOR_PATH_OPTION: &str = "tumor";

const DEFAULT_BRAIN_PATH: &str = "output-t2w.obj";
const DEFAULT_TUMOR_PATH: &str = "output-seg.obj";

/// One-time uniform scale applied to both meshes at load.
const MESH_SCALE: f64 = 0.25;

/// Pale translucent blue-grey for the surrounding brain surface.
const BRAIN_DIFFUSE: [f64; 4] = [0.8, 0.8, 0.98, 0.95];

/// Opaque red for the segmented tumor, outlined by the wireframe overlay.
const TUMOR_DIFFUSE: [f64; 4] = [0.84, 0.1, 0.11, 1.0];

/// The two-object slicing scene: a translucent brain surface drawn first,
/// the segmented tumor drawn opaque with edges on top of it.
pub struct BrainTumorSceneProvider {
    mesh_loader: Box<dyn MeshLoader>,
}

impl BrainTumorSceneProvider {

    pub fn new(mesh_loader: Box<dyn MeshLoader>) -> Self {
        Self {
            mesh_loader,
        }
    }
}

impl SceneProvider for BrainTumorSceneProvider {

    fn scene(&self, options: &HashMap<String, String>) -> Result<Scene, NeuroviewIOError> {
        let brain_path = options.get(BRAIN_PATH_OPTION)
            .map(String::as_str)
            .unwrap_or(DEFAULT_BRAIN_PATH);
        let tumor_path = options.get(TUMOR_PATH_OPTION)
            .map(String::as_str)
            .unwrap_or(DEFAULT_TUMOR_PATH);

        info!("loading brain surface from {}", brain_path);
        let brain_mesh = self.mesh_loader.load(brain_path)?;
        let brain = MeshObject::from_mesh(&brain_mesh, MESH_SCALE, Material::new(BRAIN_DIFFUSE), false)?;
        info!("brain surface: {} vertices, {} triangles", brain.vertices().len(), brain.faces().len());

        info!("loading segmented tumor from {}", tumor_path);
        let tumor_mesh = self.mesh_loader.load(tumor_path)?;
        let tumor = MeshObject::from_mesh(&tumor_mesh, MESH_SCALE, Material::new(TUMOR_DIFFUSE), true)?;
        info!("segmented tumor: {} vertices, {} triangles", tumor.vertices().len(), tumor.faces().len());

        let mut scene = Scene::new(Camera::new(
            45.0,
            1.0,
            0.1,
            500.0,
            Vector3::new(-30.0, -20.0, -100.0),
        ));
        scene.add_light(Light::new(
            Vector3::new(0.0, -20.0, -100.0),
            [0.5, 0.5, 0.5],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
        ));

        scene.add_object(brain);
        scene.add_object(tumor);

        Ok(scene)
    }
}
