use super::camera::Camera;
use super::light::Light;
use crate::objects::mesh_object::MeshObject;

/// Camera, lights, and the draw-ordered object list. The first object is
/// the primary one: it is drawn translucent and its centroid is the
/// rotation pivot for the whole scene.
pub struct Scene {
    camera: Camera,
    objects: Vec<MeshObject>,
    lights: Vec<Light>,
}

impl Scene {

    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn add_object(&mut self, object: MeshObject) {
        self.objects.push(object)
    }

    pub fn objects(&self) -> &Vec<MeshObject> {
        &self.objects
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light)
    }

    pub fn lights(&self) -> &Vec<Light> {
        &self.lights
    }
}
