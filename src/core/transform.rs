use super::Vec3;

/// Rigid pose from the XR hit-test source: a column-major 4x4 matrix,
/// laid out the way `XRRigidTransform.matrix` delivers it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub matrix: [f32; 16],
}

impl Pose {
    pub fn identity() -> Self {
        let mut matrix = [0.0; 16];
        matrix[0] = 1.0;
        matrix[5] = 1.0;
        matrix[10] = 1.0;
        matrix[15] = 1.0;
        Self { matrix }
    }

    pub fn from_translation(t: Vec3) -> Self {
        let mut pose = Self::identity();
        pose.matrix[12] = t.x;
        pose.matrix[13] = t.y;
        pose.matrix[14] = t.z;
        pose
    }

    /// Parse a host-supplied matrix. Anything but 16 finite floats is
    /// rejected.
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        if values.len() != 16 || values.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let mut matrix = [0.0; 16];
        matrix.copy_from_slice(values);
        Some(Self { matrix })
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.matrix[12], self.matrix[13], self.matrix[14])
    }
}

/// Transform of the whole body group in the host scene: translation, yaw
/// about +y, and uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupTransform {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: f32,
}

impl GroupTransform {
    pub fn identity() -> Self {
        Self { position: Vec3::ZERO, rotation_y: 0.0, scale: 1.0 }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// `T * R_y * S`, column-major.
    pub fn matrix(&self) -> [f32; 16] {
        let (s, c) = self.rotation_y.sin_cos();
        let k = self.scale;
        let p = self.position;
        [
            c * k, 0.0, -s * k, 0.0,
            0.0, k, 0.0, 0.0,
            s * k, 0.0, c * k, 0.0,
            p.x, p.y, p.z, 1.0,
        ]
    }
}

impl Default for GroupTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_translation_reads_last_column() {
        let pose = Pose::from_translation(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(pose.translation(), Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn pose_rejects_bad_input() {
        assert!(Pose::from_slice(&[0.0; 15]).is_none());
        let mut m = Pose::identity().matrix;
        m[3] = f32::NAN;
        assert!(Pose::from_slice(&m).is_none());
        assert!(Pose::from_slice(&Pose::identity().matrix).is_some());
    }

    #[test]
    fn group_matrix_composes_translate_rotate_scale() {
        let g = GroupTransform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation_y: std::f32::consts::FRAC_PI_2,
            scale: 2.0,
        };
        let m = g.matrix();
        // +x maps to -z after a quarter turn about +y, scaled by 2.
        assert!(m[0].abs() < 1e-6);
        assert!((m[2] + 2.0).abs() < 1e-6);
        assert_eq!(m[5], 2.0);
        assert_eq!(&m[12..], &[1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn identity_group_matrix_is_identity() {
        assert_eq!(GroupTransform::identity().matrix(), Pose::identity().matrix);
    }
}
