//! 3x3 rotation matrices for orienting galaxy disks
//!
//! `Mat3` stores its values row-major and treats vectors as ROW vectors:
//! [`Mat3::transform`] computes `v * M`, while [`Mat3::mul`] is the ordinary
//! row-by-column matrix product. Under this convention
//! `v.transform(a.mul(b))` equals `v.transform(a).transform(b)`, and
//! [`Mat3::from_euler`] applies the x rotation first, then y, then z.
//! The stored entries are the transpose of the column-convention ZYX
//! (yaw-pitch-roll) composition matrix.

use crate::error::{SimError, SimResult};
use crate::math::vector::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    m: [[f64; 3]; 3], // row-major
}

impl Mat3 {
    /// Build from row-major values
    pub fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Build from free-length row slices, checking for an exact 3x3 shape
    pub fn try_from_rows(rows: &[Vec<f64>]) -> SimResult<Self> {
        if rows.len() != 3 {
            return Err(SimError::BadShape {
                what: "rotation matrix rows",
                expected: 3,
                found: rows.len(),
            });
        }
        let mut m = [[0.0; 3]; 3];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != 3 {
                return Err(SimError::BadShape {
                    what: "rotation matrix row",
                    expected: 3,
                    found: row.len(),
                });
            }
            m[i].copy_from_slice(row);
        }
        Ok(Self { m })
    }

    /// Multiplicative identity
    pub fn identity() -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Composite rotation about the x, then y, then z axes (intrinsic
    /// Tait-Bryan order under the row-vector convention)
    pub fn from_euler(x: f64, y: f64, z: f64) -> Self {
        let (sx, cx) = x.sin_cos();
        let (sy, cy) = y.sin_cos();
        let (sz, cz) = z.sin_cos();

        Self::from_rows([
            [
                cy * cz,
                cy * sz,
                -sy,
            ],
            [
                sx * sy * cz - cx * sz,
                cx * cz + sx * sy * sz,
                sx * cy,
            ],
            [
                cx * sy * cz + sx * sz,
                cx * sy * sz - sx * cz,
                cx * cy,
            ],
        ])
    }

    /// Rodrigues' rotation of `angle` radians about `axis`
    /// The axis is normalized here, so callers may pass any nonzero vector.
    /// A zero axis yields non-finite entries that propagate, the same policy
    /// as [`Vec3::normalize`]
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let Vec3 { x, y, z } = axis.normalize();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Self::from_rows([
            [t * x * x + c, t * x * y + s * z, t * x * z - s * y],
            [t * x * y - s * z, t * y * y + c, t * y * z + s * x],
            [t * x * z + s * y, t * y * z - s * x, t * z * z + c],
        ])
    }

    /// Apply the rotation to `v` as a row vector: `out[j] = sum_i v[i] * m[i][j]`
    /// Note the asymmetry with [`Mat3::mul`]: the matrix columns form the
    /// output basis here
    pub fn transform(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
        )
    }

    /// Ordinary 3x3 matrix product: `out[i][j] = sum_k self[i][k] * other[k][j]`
    pub fn mul(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        let mut out = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                out[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Self::from_rows(out)
    }

    /// Recover the Euler angles consistent with [`Mat3::from_euler`]
    /// Only valid away from gimbal lock (cos y near 0); no special-casing
    /// is performed there
    pub fn to_euler(&self) -> (f64, f64, f64) {
        let m = &self.m;
        let y = (-m[0][2]).asin();
        let x = m[1][2].atan2(m[2][2]);
        let z = m[0][1].atan2(m[0][0]);
        (x, y, z)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.m[row][col] = value;
    }

    /// Defensive copy of the backing row-major values
    pub fn to_array(&self) -> [[f64; 3]; 3] {
        self.m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};

    fn assert_vec_close(a: Vec3, b: Vec3, tol: f64) {
        assert!((a - b).magnitude() < tol, "expected {b:?}, got {a:?}");
    }

    fn assert_mat_close(a: &Mat3, b: &Mat3, tol: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (a.get(i, j) - b.get(i, j)).abs() < tol,
                    "entry ({i},{j}): expected {}, got {}",
                    b.get(i, j),
                    a.get(i, j)
                );
            }
        }
    }

    #[test]
    fn identity_transform_is_noop() {
        let v = Vec3::new(1.0, -2.5, 0.75);
        assert_vec_close(Mat3::identity().transform(v), v, 1e-15);
    }

    #[test]
    fn zero_angle_rotation_is_identity() {
        let r = Mat3::from_axis_angle(Vec3::new(2.0, -1.0, 5.0), 0.0);
        assert_mat_close(&r, &Mat3::identity(), 1e-15);
    }

    #[test]
    fn axis_angle_matches_euler_on_principal_axes() {
        let a = FRAC_PI_3;
        assert_mat_close(
            &Mat3::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), a),
            &Mat3::from_euler(a, 0.0, 0.0),
            1e-12,
        );
        assert_mat_close(
            &Mat3::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), a),
            &Mat3::from_euler(0.0, a, 0.0),
            1e-12,
        );
        assert_mat_close(
            &Mat3::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), a),
            &Mat3::from_euler(0.0, 0.0, a),
            1e-12,
        );
    }

    #[test]
    fn axis_does_not_need_to_be_normalized() {
        let a = 0.9;
        let unit = Mat3::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), a);
        let scaled = Mat3::from_axis_angle(Vec3::new(0.0, 0.0, 7.5), a);
        assert_mat_close(&scaled, &unit, 1e-12);
    }

    #[test]
    fn quarter_turn_about_z_sends_x_to_y() {
        let r = Mat3::from_euler(0.0, 0.0, FRAC_PI_2);
        assert_vec_close(
            r.transform(Vec3::new(1.0, 0.0, 0.0)),
            Vec3::new(0.0, 1.0, 0.0),
            1e-12,
        );
    }

    #[test]
    fn transform_composes_like_mul() {
        // Row-vector convention: v * (A * B) == (v * A) * B
        let a = Mat3::from_euler(0.3, -0.7, 1.1);
        let b = Mat3::from_euler(-1.2, 0.4, 0.9);
        let v = Vec3::new(0.5, -2.0, 3.5);
        assert_vec_close(
            a.mul(&b).transform(v),
            b.transform(a.transform(v)),
            1e-12,
        );
    }

    #[test]
    fn euler_round_trip_away_from_gimbal_lock() {
        let (x, y, z) = (FRAC_PI_6, -FRAC_PI_4, 2.0);
        let (rx, ry, rz) = Mat3::from_euler(x, y, z).to_euler();
        assert!((rx - x).abs() < 1e-12);
        assert!((ry - y).abs() < 1e-12);
        assert!((rz - z).abs() < 1e-12);
    }

    #[test]
    fn rotation_preserves_magnitude() {
        let r = Mat3::from_euler(0.2, 1.4, -0.6);
        let v = Vec3::new(3.0, -4.0, 12.0);
        assert!((r.transform(v).magnitude() - v.magnitude()).abs() < 1e-12);
    }

    #[test]
    fn element_access_and_defensive_copy() {
        let mut r = Mat3::identity();
        r.set(0, 1, 5.0);
        assert_eq!(r.get(0, 1), 5.0);

        let mut copy = r.to_array();
        copy[0][1] = -1.0;
        assert_eq!(r.get(0, 1), 5.0, "to_array must not alias the matrix");
    }

    #[test]
    fn try_from_rows_rejects_wrong_shape() {
        let good = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]];
        assert!(Mat3::try_from_rows(&good).is_ok());

        let short = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]];
        assert!(Mat3::try_from_rows(&short).is_err());

        let ragged = vec![vec![1.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]];
        assert!(Mat3::try_from_rows(&ragged).is_err());
    }
}
