use crate::geometry::vector3::Vector3;
use crate::render::render::RenderError;

/// Flattened vertex/normal/index arrays staged for one draw call.
///
/// Staging copies the object's buffers into draw-ready flat storage and
/// validates every index against the vertex count, so the draw itself never
/// reads out of range. The storage lives only for the duration of the call
/// that staged it; it is released on every exit path, including a failed
/// draw, when the value drops.
pub struct StagedBuffers {
    vertices: Vec<f64>,
    normals: Vec<f64>,
    indices: Vec<u32>,
}

impl StagedBuffers {

    pub fn stage(
        vertices: &[Vector3],
        normals: &[Vector3],
        faces: &[[u32; 3]],
    ) -> Result<Self, RenderError> {
        if normals.len() != vertices.len() {
            return Err(RenderError::BufferMismatch {
                description: format!(
                    "{} normals for {} vertices",
                    normals.len(), vertices.len()
                )
            });
        }

        for face in faces {
            for index in face {
                if *index as usize >= vertices.len() {
                    return Err(RenderError::IndexOutOfRange {
                        description: format!(
                            "index {} with {} vertices staged",
                            index, vertices.len()
                        )
                    });
                }
            }
        }

        Ok(StagedBuffers {
            vertices: flatten(vertices),
            normals: flatten(normals),
            indices: faces.iter().flatten().copied().collect(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn vertex(&self, index: usize) -> Vector3 {
        unflatten(&self.vertices, index)
    }

    pub fn normal(&self, index: usize) -> Vector3 {
        unflatten(&self.normals, index)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangle(&self, triangle: usize) -> [u32; 3] {
        [
            self.indices[triangle * 3],
            self.indices[triangle * 3 + 1],
            self.indices[triangle * 3 + 2],
        ]
    }
}

fn flatten(vectors: &[Vector3]) -> Vec<f64> {
    let mut flat = Vec::with_capacity(vectors.len() * 3);
    for vector in vectors {
        flat.push(vector.x);
        flat.push(vector.y);
        flat.push(vector.z);
    }
    flat
}

fn unflatten(flat: &[f64], index: usize) -> Vector3 {
    Vector3::new(flat[index * 3], flat[index * 3 + 1], flat[index * 3 + 2])
}
