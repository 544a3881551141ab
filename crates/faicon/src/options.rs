//! Presentational options of a rendered icon.

use std::fmt::Display;

use ecow::{EcoString, eco_format};
use serde::{Deserialize, Deserializer};

/// How a single icon reference is presented. Empty fields are omitted from
/// the output.
///
/// Deserializes from a map such as `{"size": 256, "color": "#d50"}`. Unknown
/// keys are ignored.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Width and height in pixels.
    #[serde(deserialize_with = "deserialize_size")]
    pub size: EcoString,
    /// A CSS color used to fill the icon.
    pub color: EcoString,
    /// Space-separated CSS classes, appended after the base class.
    pub class: EcoString,
}

impl RenderOptions {
    /// Options that leave everything at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size in pixels.
    pub fn with_size(mut self, size: impl Display) -> Self {
        self.size = eco_format!("{size}");
        self
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: impl Into<EcoString>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the extra CSS classes.
    pub fn with_class(mut self, class: impl Into<EcoString>) -> Self {
        self.class = class.into();
        self
    }
}

/// Accepts sizes written as numbers or strings.
fn deserialize_size<'de, D>(deserializer: D) -> Result<EcoString, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Int(i64),
        Float(f64),
        Str(EcoString),
    }

    Ok(match Option::<Size>::deserialize(deserializer)? {
        Some(Size::Int(v)) => eco_format!("{v}"),
        Some(Size::Float(v)) => eco_format!("{v}"),
        Some(Size::Str(v)) => v,
        None => EcoString::new(),
    })
}
