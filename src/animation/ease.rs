/// Easing curve applied to an animation's clamped progress.
///
/// Named in timeline JSON as `linear`, `in_quad`, `out_quad`, `in_out_quad`, and the
/// matching `*_cubic` forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity curve.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

impl Ease {
    /// Every curve, linear first.
    pub const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ];

    /// Map progress through the curve.
    ///
    /// Input is clamped to `[0, 1]`, and `0` and `1` map to themselves so an eased
    /// animation still starts and lands exactly where a linear one would.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let Some((shape, power)) = self.polynomial() else {
            return t;
        };
        match shape {
            Shape::In => t.powi(power),
            Shape::Out => 1.0 - (1.0 - t).powi(power),
            Shape::InOut if t < 0.5 => 0.5 * (2.0 * t).powi(power),
            Shape::InOut => 1.0 - 0.5 * (2.0 - 2.0 * t).powi(power),
        }
    }

    /// Name used in timeline JSON and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in_quad",
            Self::OutQuad => "out_quad",
            Self::InOutQuad => "in_out_quad",
            Self::InCubic => "in_cubic",
            Self::OutCubic => "out_cubic",
            Self::InOutCubic => "in_out_cubic",
        }
    }

    fn polynomial(self) -> Option<(Shape, i32)> {
        match self {
            Self::Linear => None,
            Self::InQuad => Some((Shape::In, 2)),
            Self::OutQuad => Some((Shape::Out, 2)),
            Self::InOutQuad => Some((Shape::InOut, 2)),
            Self::InCubic => Some((Shape::In, 3)),
            Self::OutCubic => Some((Shape::Out, 3)),
            Self::InOutCubic => Some((Shape::InOut, 3)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
