//! Conversion of icon files into reusable symbols and references to them.

use roxmltree::ParsingOptions;

use crate::diag::{StrResult, format_xml_error};
use crate::markup::{Markup, Writer};
use crate::options::RenderOptions;

/// The class every icon reference carries.
pub const BASE_CLASS: &str = "fa-svg-icon";

/// The class of the invisible container holding symbol definitions.
pub const HIDDEN_CLASS: &str = "d-none";

/// Turns the source of an icon file into an invisible container holding a
/// `<symbol>` with the given id.
///
/// The symbol takes over the `viewBox` of the source's root element and all of
/// its child nodes, in order and copied verbatim from the source text.
pub fn define(id: &str, source: &str) -> StrResult<Markup> {
    let doc = roxmltree::Document::parse_with_options(
        source,
        ParsingOptions { allow_dtd: true, ..Default::default() },
    )
    .map_err(format_xml_error)?;
    let root = doc.root_element();
    let view_box = root.attribute("viewBox").unwrap_or_default();

    let mut w = Writer::new();
    w.start("svg").attr("class", HIDDEN_CLASS).finish_start();
    w.start("symbol").attr("id", id).attr("viewBox", view_box).finish_start();
    for child in root.children() {
        w.raw(&source[child.range()]);
    }
    w.end("symbol").end("svg");

    Ok(w.into_markup())
}

/// Builds a visible, styled reference to the symbol with the given id.
pub fn reference(id: &str, options: &RenderOptions) -> Markup {
    let size = options.size.as_str();
    let color = options.color.as_str();

    let mut w = Writer::new();
    w.start("svg");

    if !size.is_empty() {
        w.attr("width", size).attr("height", size);
    }

    if !color.is_empty() {
        w.attr("fill", color);
    }

    w.attr_with("class", |v| {
        v.push_str(BASE_CLASS);
        if !options.class.is_empty() {
            v.push_str(" ");
            v.push_str(&options.class);
        }
    });

    if !size.is_empty() || !color.is_empty() {
        w.attr_with("style", |v| {
            if !size.is_empty() {
                for prop in ["width:", "height:"] {
                    v.push_str(prop);
                    v.push_str(size);
                    v.push_str("px;");
                }
            }
            if !color.is_empty() {
                v.push_str("fill:");
                v.push_str(color);
                v.push_str(";");
            }
        });
    }

    w.finish_start();
    w.start("use")
        .attr_with("xlink:href", |v| {
            v.push_str("#");
            v.push_str(id);
        })
        .finish_start()
        .end("use");
    w.end("svg");

    w.into_markup()
}
