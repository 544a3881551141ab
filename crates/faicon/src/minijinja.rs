//! The `fa` function for minijinja templates.
//!
//! ```jinja
//! {{ fa("smile-beam") }}
//! {{ fa("far smile-beam", {"size": 256, "color": "#d50", "class": "card shadow"}) }}
//! ```

use std::sync::Arc;

use ecow::{EcoString, eco_format};
use ::minijinja::value::{Value, ValueKind};
use ::minijinja::{Environment, Error, ErrorKind};

use crate::diag::{HintedString, IconError};
use crate::{IconRenderer, RenderOptions};

/// The name under which the function is registered.
pub const FUNCTION_NAME: &str = "fa";

/// Registers the `fa` function, backed by the given renderer.
///
/// The function returns a safe string, so auto-escaping leaves it untouched.
/// All templates rendered by the environment share the renderer, and thus its
/// symbol cache.
pub fn register(env: &mut Environment<'_>, renderer: Arc<IconRenderer>) {
    env.add_function(
        FUNCTION_NAME,
        move |spec: &str, options: Option<Value>| -> Result<Value, Error> {
            let options = match options {
                Some(value) => convert_options(&value)?,
                None => RenderOptions::default(),
            };
            let markup = renderer.render(spec, &options).map_err(convert_error)?;
            Ok(Value::from_safe_string(markup.into_inner().into()))
        },
    );
}

/// Reads render options out of a template map.
fn convert_options(value: &Value) -> Result<RenderOptions, Error> {
    if value.is_undefined() || value.is_none() {
        return Ok(RenderOptions::default());
    }

    if value.kind() != ValueKind::Map {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("icon options must be a map, found {}", value.kind()),
        ));
    }

    let field = |name: &str| -> Result<EcoString, Error> {
        let item = value.get_item(&Value::from(name))?;
        Ok(if item.is_undefined() || item.is_none() {
            EcoString::new()
        } else {
            eco_format!("{item}")
        })
    };

    Ok(RenderOptions {
        size: field("size")?,
        color: field("color")?,
        class: field("class")?,
    })
}

/// Turns a rendering failure into a template error.
fn convert_error(err: IconError) -> Error {
    let hinted = HintedString::from(err);
    Error::new(ErrorKind::InvalidOperation, hinted.to_string())
}
