use crate::Mat4;

/// Six-scalar 2D affine map, laid out like the canvas `transform(a, b, c, d, e, f)`
/// arguments:
///
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
///
/// `a`, `b`, `c`, `d` carry scale, rotation and skew; `e`, `f` the translation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineParams {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl AffineParams {
    pub const IDENTITY: AffineParams = AffineParams::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn translate(x: f32, y: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    pub const fn scale(x: f32, y: f32) -> Self {
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Clockwise rotation in a y-down coordinate system.
    pub fn rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Shear along x by `x_radians` and along y by `y_radians`.
    pub fn skew(x_radians: f32, y_radians: f32) -> Self {
        Self::new(1.0, y_radians.tan(), x_radians.tan(), 1.0, 0.0, 0.0)
    }

    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_affine(self)
    }

    /// Applies the map to a single point.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (self.a * x + self.c * y + self.e, self.b * x + self.d * y + self.f)
    }
}

impl Default for AffineParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 6]> for AffineParams {
    fn from([a, b, c, d, e, f]: [f32; 6]) -> Self {
        Self::new(a, b, c, d, e, f)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn embeds_into_homogeneous_matrix() {
        let m = AffineParams::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).to_mat4();

        #[rustfmt::skip]
        let expected = [
            1.0, 2.0, 0.0, 0.0,
            3.0, 4.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            5.0, 6.0, 0.0, 1.0,
        ];
        assert_eq!(m.data, expected);
    }

    #[test]
    fn identity_params_give_identity_matrix() {
        assert_eq!(AffineParams::default().to_mat4(), Mat4::IDENTITY);
    }

    #[test]
    fn matrix_and_direct_application_agree() {
        let params = AffineParams::new(1.5, -0.5, 0.25, 2.0, 30.0, -4.0);
        let (x, y) = params.apply(7.0, 3.0);
        let [mx, my, _, w] = params.to_mat4().transform_point([7.0, 3.0, 0.0, 1.0]);

        assert!((x - mx).abs() < 1e-5);
        assert!((y - my).abs() < 1e-5);
        assert_eq!(w, 1.0);
    }

    #[test]
    fn quarter_turn_rotates_x_axis_onto_y_axis() {
        let (x, y) = AffineParams::rotate(FRAC_PI_2).apply(1.0, 0.0);
        assert!(x.abs() < 1e-6);
        assert!((y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn skew_shears_along_axes() {
        let (x, y) = AffineParams::skew(std::f32::consts::FRAC_PI_4, 0.0).apply(0.0, 2.0);
        assert!((x - 2.0).abs() < 1e-5);
        assert_eq!(y, 2.0);
    }
}
