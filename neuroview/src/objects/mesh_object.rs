use crate::geometry::normals::calculate_normals;
use crate::geometry::vector3::Vector3;
use crate::io::traits::{Mesh, NeuroviewIOError};
use crate::materials::material::Material;

/// One renderable surface: vertex/index/normal buffers, the centroid used
/// as the rotation pivot, and the per-object appearance.
pub struct MeshObject {
    vertices: Vec<Vector3>,
    faces: Vec<[u32; 3]>,
    normals: Vec<Vector3>,
    centroid: Vector3,
    material: Material,
    draw_edges: bool,
}

impl MeshObject {

    /// Build from a loaded mesh: apply the one-time uniform scale, validate
    /// the index buffer, derive normals and the centroid. The buffers are
    /// immutable afterwards.
    pub fn from_mesh(
        mesh: &Box<dyn Mesh>,
        scale: f64,
        material: Material,
        draw_edges: bool,
    ) -> Result<Self, NeuroviewIOError> {
        let vertices: Vec<Vector3> = mesh.vertices().iter()
            .map(|vertex| vertex * scale)
            .collect();
        let faces = mesh.faces().clone();

        for face in &faces {
            for index in face {
                if *index as usize >= vertices.len() {
                    return Err(NeuroviewIOError::InvalidMesh {
                        description: format!(
                            "face references vertex {} but the mesh has {} vertices",
                            index, vertices.len()
                        )
                    });
                }
            }
        }

        let normals = calculate_normals(&vertices, &faces);
        let centroid = mean(&vertices);

        Ok(MeshObject {
            vertices,
            faces,
            normals,
            centroid,
            material,
            draw_edges,
        })
    }

    pub fn vertices(&self) -> &Vec<Vector3> {
        &self.vertices
    }

    pub fn faces(&self) -> &Vec<[u32; 3]> {
        &self.faces
    }

    pub fn normals(&self) -> &Vec<Vector3> {
        &self.normals
    }

    pub fn centroid(&self) -> &Vector3 {
        &self.centroid
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn draw_edges(&self) -> bool {
        self.draw_edges
    }
}

fn mean(vertices: &[Vector3]) -> Vector3 {
    if vertices.is_empty() {
        return Vector3::zero();
    }

    let mut sum = Vector3::zero();
    for vertex in vertices {
        sum = sum + *vertex;
    }
    sum * (1.0 / vertices.len() as f64)
}

#[cfg(test)]
mod tests {

    use super::*;

    struct FixedMesh {
        vertices: Vec<Vector3>,
        faces: Vec<[u32; 3]>,
    }

    impl Mesh for FixedMesh {

        fn vertices(&self) -> &Vec<Vector3> {
            &self.vertices
        }

        fn faces(&self) -> &Vec<[u32; 3]> {
            &self.faces
        }
    }

    fn triangle_mesh() -> Box<dyn Mesh> {
        Box::new(FixedMesh {
            vertices: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(4.0, 0.0, 0.0),
                Vector3::new(0.0, 4.0, 0.0),
            ],
            faces: vec![[0, 1, 2]],
        })
    }

    #[test]
    fn test_scale_and_centroid() {
        let object = MeshObject::from_mesh(&triangle_mesh(), 0.25, Material::new([1.0; 4]), false)
            .unwrap();

        assert_eq!(object.vertices()[1], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(object.centroid(), &Vector3::new(1.0 / 3.0, 1.0 / 3.0, 0.0));
    }

    #[test]
    fn test_normals_are_derived_per_vertex() {
        let object = MeshObject::from_mesh(&triangle_mesh(), 1.0, Material::new([1.0; 4]), false)
            .unwrap();

        assert_eq!(object.normals().len(), object.vertices().len());
        assert_eq!(object.normals()[0], Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_out_of_range_face_is_rejected() {
        let mesh: Box<dyn Mesh> = Box::new(FixedMesh {
            vertices: vec![Vector3::zero(), Vector3::new(1.0, 0.0, 0.0)],
            faces: vec![[0, 1, 2]],
        });

        let res = MeshObject::from_mesh(&mesh, 1.0, Material::new([1.0; 4]), false);
        match res {
            Ok(_) => panic!("Test should fail due to an out-of-range face index!"),
            Err(err) => assert!(format!("{}", err).contains("face references vertex 2")),
        };
    }
}
