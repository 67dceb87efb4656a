use custom_error::custom_error;

use crate::geometry::vector3::Vector3;

custom_error! {pub NeuroviewIOError
    FailedToLoad {description: String} = "Failed to load mesh: {description}",
    InvalidMesh {description: String} = "Invalid mesh: {description}",
}

/// An indexed triangle mesh as it comes off disk: positions plus 0-based
/// triangle indices.
pub trait Mesh {

    fn vertices(&self) -> &Vec<Vector3>;

    fn faces(&self) -> &Vec<[u32; 3]>;
}

pub trait MeshLoader {

    fn load(&self, path: &str) -> Result<Box<dyn Mesh>, NeuroviewIOError>;
}
