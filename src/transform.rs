/// A 2D affine transformation matrix stored in row-major order.
///
/// Hosts that render through CSS or a canvas can feed this straight into
/// `matrix(a, b, c, d, e, f)` style APIs via [`Transform::components`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Matrix data in row-major order: [m00, m01, tx, m10, m11, ty]
    pub data: [f32; 6],
}

impl Transform {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, // row 1
        ],
    };

    /// Create an identity transform
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, x, // row 0
                0.0, 1.0, y, // row 1
            ],
        }
    }

    /// Create a uniform scale transform
    pub fn scale(s: f32) -> Self {
        Self::scale_xy(s, s)
    }

    /// Create a non-uniform scale transform
    pub fn scale_xy(sx: f32, sy: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, // row 0
                0.0, sy, 0.0, // row 1
            ],
        }
    }

    /// Compose this transform with another: other * self.
    /// Applies `self` first, then `other`.
    pub fn then(&self, other: &Transform) -> Transform {
        let a = &self.data;
        let b = &other.data;
        Transform {
            data: [
                b[0] * a[0] + b[1] * a[3],
                b[0] * a[1] + b[1] * a[4],
                b[0] * a[2] + b[1] * a[5] + b[2],
                b[3] * a[0] + b[4] * a[3],
                b[3] * a[1] + b[4] * a[4],
                b[3] * a[2] + b[4] * a[5] + b[5],
            ],
        }
    }

    /// Transform a 2D point by this matrix
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let new_x = self.data[0] * x + self.data[1] * y + self.data[2];
        let new_y = self.data[3] * x + self.data[4] * y + self.data[5];
        (new_x, new_y)
    }

    /// The six affine components in CSS `matrix()` argument order:
    /// (a, b, c, d, e, f) where a..d are the linear part read
    /// column by column and e, f are the translation.
    pub fn components(&self) -> (f32, f32, f32, f32, f32, f32) {
        (
            self.data[0],
            self.data[3],
            self.data[1],
            self.data[4],
            self.data[2],
            self.data[5],
        )
    }

    /// Check if this is the identity transform
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_identity() {
        let t = Transform::identity();
        assert_eq!(t, Transform::IDENTITY);
        assert!(t.is_identity());
        let (x, y) = t.transform_point(3.0, 4.0);
        assert!(approx_eq(x, 3.0));
        assert!(approx_eq(y, 4.0));
    }

    #[test]
    fn test_translate() {
        let t = Transform::translate(10.0, 20.0);
        let (x, y) = t.transform_point(0.0, 0.0);
        assert!(approx_eq(x, 10.0));
        assert!(approx_eq(y, 20.0));

        let (x2, y2) = t.transform_point(5.0, 5.0);
        assert!(approx_eq(x2, 15.0));
        assert!(approx_eq(y2, 25.0));
    }

    #[test]
    fn test_scale() {
        let t = Transform::scale(2.0);
        let (x, y) = t.transform_point(3.0, 4.0);
        assert!(approx_eq(x, 6.0));
        assert!(approx_eq(y, 8.0));
    }

    #[test]
    fn test_scale_xy() {
        let t = Transform::scale_xy(2.0, 3.0);
        let (x, y) = t.transform_point(1.0, 1.0);
        assert!(approx_eq(x, 2.0));
        assert!(approx_eq(y, 3.0));
    }

    #[test]
    fn test_compose() {
        // scale.then(translate): first scale, then translate
        // Point (3,0) -> scale -> (6,0) -> translate -> (16,0)
        let scale = Transform::scale(2.0);
        let translate = Transform::translate(10.0, 0.0);

        let composed = scale.then(&translate);
        let (x, y) = composed.transform_point(3.0, 0.0);
        assert!(approx_eq(x, 16.0));
        assert!(approx_eq(y, 0.0));

        // Reversed order scales the translation too.
        let composed = translate.then(&scale);
        let (x, _) = composed.transform_point(3.0, 0.0);
        assert!(approx_eq(x, 26.0));
    }

    #[test]
    fn test_components_css_order() {
        let t = Transform::scale(2.0).then(&Transform::translate(10.0, 20.0));
        let (a, b, c, d, e, f) = t.components();
        assert!(approx_eq(a, 2.0));
        assert!(approx_eq(b, 0.0));
        assert!(approx_eq(c, 0.0));
        assert!(approx_eq(d, 2.0));
        assert!(approx_eq(e, 10.0));
        assert!(approx_eq(f, 20.0));
    }
}
