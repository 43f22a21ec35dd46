use crate::PageHost;

/// Shadow shown while a service card is hovered.
pub const GLOW_SHADOW: &str = "0 20px 40px rgba(0, 245, 255, 0.3)";
/// Transform applied while a call-to-action button is hovered.
pub const LIFT_TRANSFORM: &str = "translateY(-2px) scale(1.05)";

/// Inline-style effects toggled by pointer enter/leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoverEffect {
    /// `box-shadow` glow.
    Glow,
    /// Raise and enlarge slightly.
    Lift,
}

impl HoverEffect {
    /// Writes the effect's style for `key`. Leaving clears it (an empty value).
    pub fn apply<H: PageHost + ?Sized>(self, host: &mut H, key: &H::Key, hovered: bool) {
        match self {
            Self::Glow => {
                host.set_style(key, "box-shadow", if hovered { GLOW_SHADOW } else { "" });
            }
            Self::Lift => host.set_transform(key, if hovered { LIFT_TRANSFORM } else { "" }),
        }
    }
}

/// An element with a hover effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hoverable<K> {
    pub key: K,
    pub effect: HoverEffect,
}
