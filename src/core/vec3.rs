use serde::{Deserialize, Serialize};

/// 3D vector for body positions and displacements
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Length, accumulated in f64 so large components do not overflow.
    pub fn length(&self) -> f32 {
        self.length_f64() as f32
    }

    fn length_f64(&self) -> f64 {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        (x * x + y * y + z * z).sqrt()
    }

    /// Unit vector in the same direction, or `None` when the length is zero
    /// or not finite.
    pub fn try_normalize(&self) -> Option<Self> {
        let len = self.length_f64();
        if len > 0.0 && len.is_finite() {
            Some(Self::new(
                (self.x as f64 / len) as f32,
                (self.y as f64 / len) as f32,
                (self.z as f64 / len) as f32,
            ))
        } else {
            None
        }
    }

    /// Rescale to `len` keeping direction. A vector without a direction
    /// (zero or non-finite) is returned unchanged together with `false`.
    pub fn with_length(&self, len: f32) -> (Self, bool) {
        match self.try_normalize() {
            Some(dir) => (dir * len, true),
            None => (*self, false),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_length_keeps_direction() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        let (scaled, ok) = v.with_length(10.0);
        assert!(ok);
        assert!((scaled.length() - 10.0).abs() < 1e-5);
        assert!((scaled.x - 6.0).abs() < 1e-5);
        assert!((scaled.z - 8.0).abs() < 1e-5);
    }

    #[test]
    fn zero_vector_has_no_direction() {
        assert!(Vec3::ZERO.try_normalize().is_none());
        let (same, ok) = Vec3::ZERO.with_length(2.0);
        assert!(!ok);
        assert_eq!(same, Vec3::ZERO);
    }

    #[test]
    fn huge_components_keep_their_direction() {
        let v = Vec3::new(0.0, 0.0, 1e20);
        assert_eq!(v.length(), 1e20);
        let (scaled, ok) = v.with_length(5.0);
        assert!(ok);
        assert_eq!(scaled, Vec3::new(0.0, 0.0, 5.0));

        let (scaled, ok) = Vec3::new(3e30, 0.0, -4e30).with_length(10.0);
        assert!(ok);
        assert!((scaled.x - 6.0).abs() < 1e-5);
        assert!((scaled.z + 8.0).abs() < 1e-5);
    }

    #[test]
    fn non_finite_vector_has_no_direction() {
        assert!(Vec3::new(f32::NAN, 0.0, 0.0).try_normalize().is_none());
        assert!(Vec3::new(f32::INFINITY, 1.0, 0.0).try_normalize().is_none());
        assert!(!Vec3::new(0.0, f32::NAN, 0.0).is_finite());
        assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
    }
}
