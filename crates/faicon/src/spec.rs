//! Parsing of icon names.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use ecow::{EcoString, eco_format};

use crate::diag::{IconError, IconResult, SpecError};

/// One of the visual variants an icon is available in.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Style {
    /// Filled glyphs. Used when no prefix is given.
    #[default]
    Solid,
    /// Outlined glyphs.
    Regular,
    /// Logo marks.
    Brands,
}

impl Style {
    /// All styles, in prefix order.
    pub const ALL: [Self; 3] = [Self::Solid, Self::Regular, Self::Brands];

    /// Maps a name prefix (`fas`, `far`, or `fab`) to its style.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.prefix() == prefix)
    }

    /// The prefix that selects this style in an icon name.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Solid => "fas",
            Self::Regular => "far",
            Self::Brands => "fab",
        }
    }

    /// The name of the asset directory holding icons of this style.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Regular => "regular",
            Self::Brands => "brands",
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.dir())
    }
}

/// A parsed icon name: which icon, in which style.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct IconSpec {
    /// The style the icon is drawn in.
    pub style: Style,
    /// The icon's name within its style, without any `fa-` prefix.
    pub id: EcoString,
}

impl IconSpec {
    /// Creates a spec from its parts.
    pub fn new(style: Style, id: impl Into<EcoString>) -> Self {
        Self { style, id: id.into() }
    }

    /// Parses an icon name like `"smile-beam"`, `"fa-smile-beam"`, or
    /// `"far smile-beam"`.
    ///
    /// An empty or blank name is rejected with [`SpecError::Empty`] before
    /// any lookup happens, so it never surfaces as a missing icon.
    pub fn parse(raw: &str) -> IconResult<Self> {
        let mut parts = raw.split_whitespace();
        let (style, icon) = match (parts.next(), parts.next(), parts.next()) {
            (None, _, _) => return Err(SpecError::Empty.into()),
            (Some(icon), None, _) => (Style::default(), icon),
            (Some(prefix), Some(icon), None) => {
                let style = Style::from_prefix(prefix)
                    .ok_or_else(|| SpecError::UnknownPrefix(prefix.into()))?;
                (style, icon)
            }
            (Some(_), Some(_), Some(_)) => {
                return Err(SpecError::TooManyParts(raw.trim().into()).into());
            }
        };

        let id = icon.strip_prefix("fa-").unwrap_or(icon);
        Ok(Self::new(style, id))
    }

    /// The identifier of the `<symbol>` defining this icon.
    ///
    /// This is a pure function of style and id, so any renderer derives the
    /// same identifier for the same icon.
    pub fn symbol_id(&self) -> EcoString {
        eco_format!("fa-{}-{}", self.style.dir(), self.id)
    }
}

impl FromStr for IconSpec {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for IconSpec {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.style.prefix(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn test(raw: &str, style: Style, id: &str) {
        assert_eq!(IconSpec::parse(raw), Ok(IconSpec::new(style, id)));
    }

    #[track_caller]
    fn test_err(raw: &str, err: SpecError) {
        assert_eq!(IconSpec::parse(raw), Err(IconError::InvalidSpec(err)));
    }

    #[test]
    fn test_parse_prefixes() {
        test("fas smile-beam", Style::Solid, "smile-beam");
        test("far smile-beam", Style::Regular, "smile-beam");
        test("fab github", Style::Brands, "github");
    }

    #[test]
    fn test_parse_default_style() {
        test("smile-beam", Style::Solid, "smile-beam");
        test("  file  ", Style::Solid, "file");
        test("fa-file", Style::Solid, "file");
    }

    #[test]
    fn test_parse_strips_fa_prefix_once() {
        test("far fa-smile-beam", Style::Regular, "smile-beam");
        test("fa-fa-file", Style::Solid, "fa-file");
        test("FA-file", Style::Solid, "FA-file");
        test("fa-", Style::Solid, "");
    }

    #[test]
    fn test_parse_errors() {
        test_err("xx missing", SpecError::UnknownPrefix("xx".into()));
        test_err("FAS file", SpecError::UnknownPrefix("FAS".into()));
        test_err("fas fa-file extra", SpecError::TooManyParts("fas fa-file extra".into()));
        test_err("", SpecError::Empty);
        test_err(" \t ", SpecError::Empty);
    }

    #[test]
    fn test_symbol_id() {
        let plain: IconSpec = "smile-beam".parse().unwrap();
        let prefixed: IconSpec = "fas fa-smile-beam".parse().unwrap();
        assert_eq!(plain.symbol_id(), "fa-solid-smile-beam");
        assert_eq!(plain.symbol_id(), prefixed.symbol_id());
        assert_eq!(IconSpec::new(Style::Brands, "github").symbol_id(), "fa-brands-github");
    }

    #[test]
    fn test_display_round_trips() {
        let spec = IconSpec::new(Style::Regular, "bell");
        assert_eq!(spec.to_string(), "far bell");
        assert_eq!(spec.to_string().parse::<IconSpec>(), Ok(spec));
    }
}
