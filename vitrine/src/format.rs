use std::fmt;

/// Display policy for counter values, parsed from the element's suffix attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suffix {
    /// `"M"`: one decimal place, e.g. `2.5M`.
    Millions,
    /// `"%"`: integer part, e.g. `98%`.
    Percent,
    /// `"+"`: integer part, e.g. `500+`.
    Plus,
    /// Any other suffix text (possibly empty), appended to the integer part.
    Raw(String),
    #[default]
    None,
}

impl Suffix {
    pub fn parse(attr: &str) -> Self {
        match attr {
            "M" => Self::Millions,
            "%" => Self::Percent,
            "+" => Self::Plus,
            "" => Self::None,
            other => Self::Raw(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Millions => "M",
            Self::Percent => "%",
            Self::Plus => "+",
            Self::Raw(s) => s,
            Self::None => "",
        }
    }

    /// Formats a (finite) counter value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Millions => format!("{:.1}{}", round_tenths(value), self.as_str()),
            _ => format!("{}{}", floor_int(value), self.as_str()),
        }
    }
}

impl From<&str> for Suffix {
    fn from(attr: &str) -> Self {
        Self::parse(attr)
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Rounds half away from zero, so `1.25` shows as `1.3` rather than the tie-to-even `1.2`.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

// `floor(-0.0)` is `-0.0`; adding `+0.0` normalizes it so it never renders as "-0".
fn floor_int(value: f64) -> f64 {
    value.floor() + 0.0
}
