//! Trusted markup and the writer producing it.

use std::fmt::{self, Display, Formatter};

use ecow::EcoString;

/// A fragment of HTML/SVG markup that is safe to embed without escaping.
///
/// Values of this type are only produced by this crate. Everything that ended
/// up inside of it was either copied from an icon file or escaped on the way
/// in, so hosts should emit it as-is and not run it through their escaper.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Markup(EcoString);

impl Markup {
    /// The markup as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the underlying string.
    pub fn into_inner(self) -> EcoString {
        self.0
    }

    /// Appends another fragment to this one.
    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    /// Whether the fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0.into()
    }
}

/// Writes elements into a [`Markup`] buffer.
///
/// Attribute values are escaped. Raw content is written verbatim and must
/// already be valid markup.
#[derive(Default)]
pub(crate) struct Writer {
    buf: EcoString,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a start tag. Must be followed by [`Self::finish_start`] after the
    /// attributes are written.
    pub fn start(&mut self, tag: &str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self
    }

    /// Write an attribute into the currently open start tag.
    pub fn attr(&mut self, name: &str, value: &str) -> &mut Self {
        self.attr_with(name, |v| v.push_str(value))
    }

    /// Write an attribute whose value is assembled piece by piece. Every piece
    /// is escaped.
    pub fn attr_with(&mut self, name: &str, f: impl FnOnce(&mut AttrValue)) -> &mut Self {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        f(&mut AttrValue { buf: &mut self.buf });
        self.buf.push('"');
        self
    }

    /// Close the currently open start tag.
    pub fn finish_start(&mut self) -> &mut Self {
        self.buf.push('>');
        self
    }

    /// Write an end tag.
    pub fn end(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Write trusted markup verbatim.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    pub fn into_markup(self) -> Markup {
        Markup(self.buf)
    }
}

/// The value of an attribute that is being written.
pub(crate) struct AttrValue<'a> {
    buf: &'a mut EcoString,
}

impl AttrValue<'_> {
    /// Write a piece of the value, escaping as necessary.
    pub fn push_str(&mut self, value: &str) {
        for c in value.chars() {
            write_escape(self.buf, c);
        }
    }
}

/// Escape a character for use in a double-quoted attribute value.
fn write_escape(buf: &mut EcoString, c: char) {
    match c {
        '&' => buf.push_str("&amp;"),
        '<' => buf.push_str("&lt;"),
        '>' => buf.push_str("&gt;"),
        '"' => buf.push_str("&quot;"),
        c => buf.push(c),
    }
}
