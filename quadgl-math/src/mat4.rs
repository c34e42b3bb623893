use std::ops::Mul;

use crate::AffineParams;

/// A 4x4 homogeneous transform stored as 16 row-major `f32`s.
///
/// Points are treated as row vectors multiplied on the left, so translation
/// lives in the last row (elements 12..15). Uploading `data` untransposed to a
/// GLSL `mat4` yields the column-major transpose, which is exactly what the
/// shader's `matrix * vector` form expects; no transposition happens on upload.
///
/// All operations return a new matrix; nothing mutates its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        data: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ],
    };

    /// Returned by [`Mat4::invert`] for singular input.
    pub const ZERO: Mat4 = Mat4 { data: [0.0; 16] };

    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Embeds a 2D affine map `[a b; c d; e f]` into a 4x4 matrix, leaving z
    /// and w untouched.
    pub fn from_affine(params: AffineParams) -> Self {
        let AffineParams { a, b, c, d, e, f } = params;

        #[rustfmt::skip]
        let data = [
            a,   b,   0.0, 0.0,
            c,   d,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            e,   f,   0.0, 1.0,
        ];

        Self { data }
    }

    /// Orthographic projection mapping `[left, right] x [top, bottom]` onto
    /// the `[-1, 1]` NDC square.
    ///
    /// Depth is scaled by a fixed factor of 2 and shifted by -1; this is a 2D
    /// renderer and z never leaves 0 in practice. Passing `top = 0` and
    /// `bottom = height` gives a top-left pixel origin with y pointing down.
    pub fn orthographic(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        let width = right - left;
        let height = top - bottom;

        #[rustfmt::skip]
        let data = [
            2.0 / width,             0.0,                       0.0,  0.0,
            0.0,                     2.0 / height,              0.0,  0.0,
            0.0,                     0.0,                       2.0,  0.0,
            -(right + left) / width, -(top + bottom) / height, -1.0,  1.0,
        ];

        Self { data }
    }

    /// Projection for a surface of `width` x `height` pixels.
    pub fn orthographic_from_size(width: f32, height: f32) -> Self {
        Self::orthographic(0.0, width, 0.0, height)
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 4 + col]
    }

    /// Row-major product `self * rhs`: row `i` of `self` dotted with column
    /// `j` of `rhs`.
    pub fn multiply(&self, rhs: &Mat4) -> Mat4 {
        let mut data = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                data[row * 4 + col] = (0..4).map(|k| self.at(row, k) * rhs.at(k, col)).sum();
            }
        }

        Mat4 { data }
    }

    pub fn transpose(&self) -> Mat4 {
        let mut data = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                data[col * 4 + row] = self.at(row, col);
            }
        }

        Mat4 { data }
    }

    pub fn determinant(&self) -> f32 {
        let minors = Minors::of(self);
        minors.determinant()
    }

    /// Inverse by cofactor expansion, or [`Mat4::ZERO`] when the determinant
    /// is exactly zero.
    ///
    /// No pivoting is performed. Check the result with [`Mat4::is_zero`], or
    /// use [`Mat4::try_invert`] to get an `Option` instead of the sentinel.
    pub fn invert(&self) -> Mat4 {
        self.try_invert().unwrap_or(Mat4::ZERO)
    }

    /// Inverse by cofactor expansion; `None` if the matrix is singular.
    pub fn try_invert(&self) -> Option<Mat4> {
        let m = Minors::of(self);
        let det = m.determinant();
        if det == 0.0 {
            return None;
        }

        let inv = 1.0 / det;
        let a = |row, col| self.at(row, col);
        let (s, c) = (m.upper, m.lower);

        #[rustfmt::skip]
        let data = [
            ( a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3]) * inv,
            (-a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3]) * inv,
            ( a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3]) * inv,
            (-a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3]) * inv,

            (-a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1]) * inv,
            ( a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1]) * inv,
            (-a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1]) * inv,
            ( a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1]) * inv,

            ( a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0]) * inv,
            (-a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0]) * inv,
            ( a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0]) * inv,
            (-a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0]) * inv,

            (-a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0]) * inv,
            ( a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0]) * inv,
            (-a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0]) * inv,
            ( a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0]) * inv,
        ];

        Some(Mat4 { data })
    }

    /// `true` for the all-zero sentinel returned by a failed [`Mat4::invert`].
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    /// Transforms the row vector `[x, y, z, w]`, i.e. computes `v * self`.
    ///
    /// This matches what the vertex shader computes with the matrix uploaded
    /// untransposed.
    pub fn transform_point(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (col, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|k| v[k] * self.at(k, col)).sum();
        }
        out
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for &Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: &Mat4) -> Mat4 {
        self.multiply(rhs)
    }
}

impl From<AffineParams> for Mat4 {
    fn from(params: AffineParams) -> Self {
        Mat4::from_affine(params)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        Mat4 { data }
    }
}

/// 2x2 sub-determinants of the upper (rows 0, 1) and lower (rows 2, 3) halves.
struct Minors {
    upper: [f32; 6],
    lower: [f32; 6],
}

impl Minors {
    fn of(m: &Mat4) -> Self {
        let a = |row, col| m.at(row, col);
        let pair = |r0: usize, r1: usize, c0: usize, c1: usize| {
            a(r0, c0) * a(r1, c1) - a(r1, c0) * a(r0, c1)
        };

        let upper = [
            pair(0, 1, 0, 1),
            pair(0, 1, 0, 2),
            pair(0, 1, 0, 3),
            pair(0, 1, 1, 2),
            pair(0, 1, 1, 3),
            pair(0, 1, 2, 3),
        ];

        let lower = [
            pair(2, 3, 0, 1),
            pair(2, 3, 0, 2),
            pair(2, 3, 0, 3),
            pair(2, 3, 1, 2),
            pair(2, 3, 1, 3),
            pair(2, 3, 2, 3),
        ];

        Self { upper, lower }
    }

    fn determinant(&self) -> f32 {
        let (s, c) = (&self.upper, &self.lower);
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}
