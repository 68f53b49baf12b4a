//! 3-component vector used throughout the simulation
//!
//! `Vec3` is a plain value type: every operation returns a new vector and
//! never mutates its operands. Arithmetic is available against both another
//! vector (component-wise) and a scalar (broadcast to all components).

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use rand::Rng;

use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Build a vector from a slice holding exactly 3 components
    /// Used by the configuration layer where component lists arrive as
    /// free-length YAML sequences
    pub fn try_from_slice(components: &[f64]) -> SimResult<Self> {
        if components.len() != 3 {
            return Err(SimError::BadShape {
                what: "vector",
                expected: 3,
                found: components.len(),
            });
        }
        Ok(Self::new(components[0], components[1], components[2]))
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length
    /// Not guarded: a zero vector divides by zero and the non-finite
    /// components propagate to the caller
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Three independent uniform draws in `[0, 1)`, scaled by `factor`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, factor: f64) -> Self {
        Self::new(
            rng.gen::<f64>() * factor,
            rng.gen::<f64>() * factor,
            rng.gen::<f64>() * factor,
        )
    }

    /// Uniform draw in a cube centered on the origin: `(random(1) - 0.5) * factor`
    /// This is a cube sample, not a ball sample; components are independent
    pub fn random_centered<R: Rng + ?Sized>(rng: &mut R, factor: f64) -> Self {
        (Self::random(rng, 1.0) - 0.5) * factor
    }
}

// =========================================================================================
// Component-wise operators (vector rhs)
// =========================================================================================

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div for Vec3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// =========================================================================================
// Broadcast operators (scalar rhs)
// =========================================================================================

impl Add<f64> for Vec3 {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub<f64> for Vec3 {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn add_sub_round_trip() {
        let a = Vec3::new(1.5, -2.0, 0.25);
        let b = Vec3::new(-4.0, 8.0, 1.0);
        let back = a + b - b;
        assert!((back - a).magnitude() < 1e-12, "round trip drifted: {back:?}");
    }

    #[test]
    fn scalar_ops_broadcast() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(v / 2.0, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(v + 1.0, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(v - 1.0, Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn normalize_has_unit_magnitude() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        assert!((v.normalize().magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_is_non_finite() {
        let n = Vec3::zero().normalize();
        assert!(!n.x.is_finite());
        assert!(!n.y.is_finite());
        assert!(!n.z.is_finite());
    }

    #[test]
    fn random_stays_in_scaled_cube() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let v = Vec3::random(&mut rng, 3.0);
            for c in [v.x, v.y, v.z] {
                assert!((0.0..3.0).contains(&c), "component out of range: {c}");
            }
        }
    }

    #[test]
    fn random_centered_straddles_origin() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let v = Vec3::random_centered(&mut rng, 4.0);
            for c in [v.x, v.y, v.z] {
                assert!((-2.0..2.0).contains(&c), "component out of range: {c}");
            }
        }
    }

    #[test]
    fn try_from_slice_rejects_wrong_arity() {
        assert!(Vec3::try_from_slice(&[1.0, 2.0, 3.0]).is_ok());
        assert!(Vec3::try_from_slice(&[1.0, 2.0]).is_err());
        assert!(Vec3::try_from_slice(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }
}
