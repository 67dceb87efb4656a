use super::vector3::Vector3;

/// Compute one averaged unit normal per vertex.
///
/// Every triangle contributes its unit face normal to the accumulator of
/// each of its three vertices (an unweighted sum, not area- or
/// angle-weighted), and the accumulators are renormalized at the end.
///
/// Degenerate triangles have a zero-length cross product and contribute
/// nothing. A vertex referenced by no (non-degenerate) triangle keeps a zero
/// normal. Callers must ensure every face index is below `vertices.len()`.
pub fn calculate_normals(vertices: &[Vector3], faces: &[[u32; 3]]) -> Vec<Vector3> {
    let mut normals = vec![Vector3::zero(); vertices.len()];

    for face in faces {
        let v0 = &vertices[face[0] as usize];
        let v1 = &vertices[face[1] as usize];
        let v2 = &vertices[face[2] as usize];

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let face_normal = edge1.cross_product(&edge2).normalized();

        for index in face {
            let index = *index as usize;
            normals[index] = normals[index] + face_normal;
        }
    }

    for normal in normals.iter_mut() {
        *normal = normal.normalized();
    }

    normals
}
