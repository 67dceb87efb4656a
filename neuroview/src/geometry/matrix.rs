use super::vector3::Vector3;

/// Column-vector affine transform. Points are transformed as `M * p`, so a
/// product `A.multiply(&B)` applies `B` first.
#[derive(Clone)]
pub struct Matrix44 {

    values: [[f64; 4]; 4],
}

impl Matrix44 {

    pub fn new(values: [[f64; 4]; 4]) -> Self {
        Matrix44 {
            values
        }
    }

    pub fn identity() -> Self {
        let mut values = [[0f64; 4]; 4];
        for i in 0..4 {
            values[i][i] = 1.0;
        }

        Self::new(values)
    }

    pub fn translation(offset: &Vector3) -> Self {
        let mut values = Self::identity().values;
        values[0][3] = offset.x;
        values[1][3] = offset.y;
        values[2][3] = offset.z;
        Self::new(values)
    }

    /// Rotation about the X axis, angle in degrees.
    pub fn rotation_x(angle: f64) -> Self {
        let angle = angle.to_radians();

        let mut values = Self::identity().values;
        values[1][1] = angle.cos();
        values[1][2] = -angle.sin();
        values[2][1] = angle.sin();
        values[2][2] = angle.cos();
        Self::new(values)
    }

    /// Rotation about the Y axis, angle in degrees.
    pub fn rotation_y(angle: f64) -> Self {
        let angle = angle.to_radians();

        let mut values = Self::identity().values;
        values[0][0] = angle.cos();
        values[0][2] = angle.sin();
        values[2][0] = -angle.sin();
        values[2][2] = angle.cos();
        Self::new(values)
    }

    pub fn multiply(&self, other: &Matrix44) -> Matrix44 {
        let mut values = [[0f64; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    values[i][j] += self.values[i][k] * other.values[k][j];
                }
            }
        }

        Matrix44::new(values)
    }

    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self.transform_vector(point) + Vector3::new(
            self.values[0][3],
            self.values[1][3],
            self.values[2][3]
        )
    }

    /// Apply only the linear (rotation) part, ignoring translation.
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        Vector3::new(
            vector.x * self.values[0][0] + vector.y * self.values[0][1] + vector.z * self.values[0][2],
            vector.x * self.values[1][0] + vector.y * self.values[1][1] + vector.z * self.values[1][2],
            vector.x * self.values[2][0] + vector.y * self.values[2][1] + vector.z * self.values[2][2]
        )
    }

    /// Model transform that rotates about `pivot`: pitch about X, then yaw
    /// about Y, with the pivot translated to the origin and back.
    pub fn pivot_rotation(pivot: &Vector3, pitch: f64, yaw: f64) -> Matrix44 {
        Matrix44::translation(pivot)
            .multiply(&Matrix44::rotation_x(pitch))
            .multiply(&Matrix44::rotation_y(yaw))
            .multiply(&Matrix44::translation(&-*pivot))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_identity_leaves_point_unchanged() {
        let point = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Matrix44::identity().transform_point(&point), point);
    }

    #[test]
    fn test_translation() {
        let point = Vector3::new(1.0, 2.0, 3.0);
        let moved = Matrix44::translation(&Vector3::new(10.0, 0.0, -1.0)).transform_point(&point);
        assert_eq!(moved, Vector3::new(11.0, 2.0, 2.0));
    }

    #[test]
    fn test_rotation_x_quarter_turn() {
        let rotated = Matrix44::rotation_x(90.0).transform_point(&Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(rotated, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        let rotated = Matrix44::rotation_y(90.0).transform_point(&Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(rotated, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotation_does_not_move_translation_free_vector() {
        let moved = Matrix44::translation(&Vector3::new(5.0, 5.0, 5.0))
            .transform_vector(&Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(moved, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_pivot_rotation_fixes_pivot() {
        let pivot = Vector3::new(3.0, -2.0, 7.0);
        let transform = Matrix44::pivot_rotation(&pivot, 33.0, -71.0);
        assert_eq!(transform.transform_point(&pivot), pivot);
    }

    #[test]
    fn test_pivot_rotation_applies_yaw_before_pitch() {
        // Yaw is the rightmost rotation in the product, so it is applied to
        // the point first.
        let transform = Matrix44::pivot_rotation(&Vector3::zero(), 90.0, 90.0);
        let moved = transform.transform_point(&Vector3::new(0.0, 0.0, 1.0));

        // Yaw about Y: (0, 0, 1) -> (1, 0, 0); pitch about X leaves it there.
        assert_eq!(moved, Vector3::new(1.0, 0.0, 0.0));
    }
}
