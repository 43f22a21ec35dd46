/// Easing curves mapping linear progress `t ∈ [0, 1]` onto eased progress.
///
/// Every curve maps 0 to 0 and 1 to 1 and is non-decreasing in between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    /// `1 - (1 - t)^4`: fast start, decelerating approach.
    #[default]
    EaseOutQuart,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutQuart => {
                let u = 1.0 - t;
                1.0 - u * u * u * u
            }
        }
    }
}
