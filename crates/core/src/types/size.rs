//! Garment sizes offered on the product detail page.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Size`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown size '{0}' (expected one of XS, S, M, L, XL)")]
pub struct SizeError(pub String);

/// A garment size.
///
/// ```
/// use atelier_core::Size;
///
/// assert_eq!("m".parse::<Size>().unwrap(), Size::M);
/// assert_eq!(Size::Xl.as_str(), "XL");
/// assert!("XXL".parse::<Size>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Self; 5] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl];

    /// The label shown to shoppers and used in cart line keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SizeError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("xs".parse::<Size>().unwrap(), Size::Xs);
        assert_eq!(" Xl ".parse::<Size>().unwrap(), Size::Xl);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!("XXL".parse::<Size>(), Err(SizeError("XXL".to_owned())));
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Size::Xl).unwrap(), "\"XL\"");
        assert_eq!(serde_json::from_str::<Size>("\"M\"").unwrap(), Size::M);
    }
}
