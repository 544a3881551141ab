//! Diagnostics.

use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

use ecow::EcoVec;

/// Early-return with a [`StrResult`] or [`HintedStrResult`].
///
/// You can also emit hints with the `; hint: "..."` syntax.
///
/// ```ignore
/// bail!("bailing with a {}", "string result");
/// bail!(
///     "bailing with a {}", "hinted result";
///     hint: "hint 1";
///     hint: "hint 2";
/// );
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __bail {
    (
        $fmt:literal $(, $arg:expr)*
        $(; hint: $hint:literal $(, $hint_arg:expr)*)*
        $(,)?
    ) => {
        return Err($crate::diag::error!(
            $fmt $(, $arg)*
            $(; hint: $hint $(, $hint_arg)*)*
        ))
    };
}

/// Construct an [`EcoString`] or [`HintedString`].
#[macro_export]
#[doc(hidden)]
macro_rules! __error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::diag::eco_format!($fmt, $($arg),*).into()
    };

    (
        $fmt:literal $(, $arg:expr)*
        $(; hint: $hint:literal $(, $hint_arg:expr)*)*
        $(,)?
    ) => {
        $crate::diag::HintedString::new(
            $crate::diag::eco_format!($fmt, $($arg),*)
        ) $(.with_hint($crate::diag::eco_format!($hint, $($hint_arg),*)))*
    };
}

#[rustfmt::skip]
#[doc(inline)]
pub use {
    crate::__bail as bail,
    crate::__error as error,
    ecow::{eco_format, EcoString},
};

/// A result type with an icon rendering error.
pub type IconResult<T> = Result<T, IconError>;

/// An error that aborts the rendering of a single icon.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum IconError {
    /// The icon name could not be parsed.
    InvalidSpec(SpecError),
    /// No icon file exists at the resolved path.
    IconNotFound {
        /// The icon as it was written by the caller.
        icon: EcoString,
        /// Where the icon was searched.
        path: PathBuf,
        /// Why the file could not be read, if it exists but is unreadable.
        reason: Option<EcoString>,
    },
    /// The icon file is not a well-formed SVG document.
    MalformedSvg {
        /// The file that failed to parse.
        path: PathBuf,
        /// What went wrong, with a position if one is known.
        error: EcoString,
    },
}

impl IconError {
    /// Create an error for an icon file that could not be read.
    pub fn from_io(err: io::Error, icon: &str, path: &Path) -> Self {
        let reason = match err.kind() {
            io::ErrorKind::NotFound => None,
            io::ErrorKind::PermissionDenied => Some("access denied".into()),
            _ => Some(eco_format!("{err}")),
        };
        Self::IconNotFound { icon: icon.into(), path: path.into(), reason }
    }

    /// Additional hints to the user, indicating how this problem could be
    /// avoided.
    pub fn hints(&self) -> &'static [&'static str] {
        match self {
            Self::InvalidSpec(err) => err.hints(),
            Self::IconNotFound { .. } => &[],
            Self::MalformedSvg { .. } => {
                &["the icon asset bundle may be corrupted or incompatible"]
            }
        }
    }
}

impl std::error::Error for IconError {}

impl Display for IconError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::InvalidSpec(err) => err.fmt(f),
            Self::IconNotFound { icon, path, reason: None } => {
                write!(f, "icon \"{icon}\" not found (searched at {})", path.display())
            }
            Self::IconNotFound { icon, path, reason: Some(reason) } => {
                write!(f, "failed to load icon \"{icon}\" from {} ({reason})", path.display())
            }
            Self::MalformedSvg { path, error } => {
                write!(f, "failed to parse icon at {} ({error})", path.display())
            }
        }
    }
}

impl From<SpecError> for IconError {
    fn from(err: SpecError) -> Self {
        Self::InvalidSpec(err)
    }
}

/// Why an icon name was rejected.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum SpecError {
    /// The name was empty or only whitespace.
    Empty,
    /// The name had more than two whitespace-separated parts.
    TooManyParts(EcoString),
    /// The style prefix is not one of `fas`, `far`, or `fab`.
    UnknownPrefix(EcoString),
}

impl SpecError {
    fn hints(&self) -> &'static [&'static str] {
        match self {
            Self::Empty | Self::TooManyParts(_) => {
                &["valid names look like \"fas fa-file\", \"fa-file\", or just \"file\""]
            }
            Self::UnknownPrefix(_) => &["allowed prefixes are \"fas\", \"far\", and \"fab\""],
        }
    }
}

impl std::error::Error for SpecError {}

impl Display for SpecError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Empty => f.pad("icon name is empty"),
            Self::TooManyParts(name) => write!(f, "invalid icon name \"{name}\""),
            Self::UnknownPrefix(prefix) => {
                write!(f, "icon prefix \"{prefix}\" is not allowed")
            }
        }
    }
}

/// A result type with a string error message.
pub type StrResult<T> = Result<T, EcoString>;

/// A result type with a string error message and hints.
pub type HintedStrResult<T> = Result<T, HintedString>;

/// A string message with hints.
///
/// The first string is the message, the rest are hints.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HintedString(EcoVec<EcoString>);

impl HintedString {
    /// Creates a new hinted string with the given message.
    pub fn new(message: EcoString) -> Self {
        Self(EcoVec::from([message]))
    }

    /// A diagnostic message describing the problem.
    pub fn message(&self) -> &EcoString {
        self.0.first().unwrap()
    }

    /// Additional hints to the user, indicating how this error could be avoided
    /// or worked around.
    pub fn hints(&self) -> &[EcoString] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// Adds a single hint.
    pub fn hint(&mut self, hint: impl Into<EcoString>) {
        self.0.push(hint.into());
    }

    /// Adds a single hint.
    pub fn with_hint(mut self, hint: impl Into<EcoString>) -> Self {
        self.hint(hint);
        self
    }
}

impl Display for HintedString {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.message())?;
        for hint in self.hints() {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

impl From<EcoString> for HintedString {
    fn from(message: EcoString) -> Self {
        Self::new(message)
    }
}

impl From<IconError> for HintedString {
    fn from(err: IconError) -> Self {
        let hints = err.hints();
        let mut hinted = Self::new(eco_format!("{err}"));
        for &hint in hints {
            hinted.hint(hint);
        }
        hinted
    }
}

/// Format a user-facing error message for a malformed SVG document.
pub fn format_xml_error(error: roxmltree::Error) -> EcoString {
    let pos = error.pos();
    let message = match error {
        roxmltree::Error::UnexpectedCloseTag(expected, actual, _) => {
            eco_format!("found closing tag '{actual}' instead of '{expected}'")
        }
        roxmltree::Error::UnknownEntityReference(entity, _) => {
            eco_format!("unknown entity '{entity}'")
        }
        roxmltree::Error::DuplicatedAttribute(attr, _) => {
            eco_format!("duplicate attribute '{attr}'")
        }
        roxmltree::Error::NoRootNode => return "missing root node".into(),
        err => eco_format!("{err}"),
    };

    eco_format!("{message} at {}:{}", pos.row, pos.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hinted_string_from_icon_error() {
        let err = IconError::InvalidSpec(SpecError::UnknownPrefix("xx".into()));
        let hinted = HintedString::from(err);
        assert_eq!(hinted.message(), "icon prefix \"xx\" is not allowed");
        assert_eq!(hinted.hints(), ["allowed prefixes are \"fas\", \"far\", and \"fab\""]);
    }

    #[test]
    fn test_not_found_message() {
        let err = IconError::from_io(
            io::ErrorKind::NotFound.into(),
            "fas nope",
            Path::new("svgs/solid/nope.svg"),
        );
        assert!(matches!(err, IconError::IconNotFound { reason: None, .. }));
        assert_eq!(
            err.to_string(),
            "icon \"fas nope\" not found (searched at svgs/solid/nope.svg)"
        );
    }

    #[test]
    fn test_format_xml_error() {
        let err = roxmltree::Document::parse("<svg><path></svg>").unwrap_err();
        let message = format_xml_error(err);
        assert!(message.starts_with("found closing tag 'svg' instead of 'path'"));
        assert!(message.contains(" at 1:"));
    }

    #[test]
    fn test_bail_with_hint() {
        fn check(ok: bool) -> HintedStrResult<()> {
            if !ok {
                bail!("check failed"; hint: "try {}", "again");
            }
            Ok(())
        }

        let err = check(false).unwrap_err();
        assert_eq!(err.message(), "check failed");
        assert_eq!(err.hints(), ["try again"]);
        assert!(check(true).is_ok());
    }
}
