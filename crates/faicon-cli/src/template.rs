use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use ecow::eco_format;
use faicon::diag::{HintedStrResult, StrResult, bail};
use minijinja::Environment;

use crate::args::TemplateCommand;

/// Execute a template command.
#[tracing::instrument(skip_all)]
pub fn template(command: &TemplateCommand) -> HintedStrResult<()> {
    let source = read(&command.input)?;
    let context = match &command.data {
        Some(path) => load_context(path)?,
        None => serde_json::Value::Object(Default::default()),
    };

    // Auto-escaping is picked by the template's file extension.
    let name = command
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "template".into());

    let mut env = Environment::new();
    faicon::minijinja::register(&mut env, Arc::new(command.shared.renderer()));
    env.add_template(&name, &source)
        .map_err(|err| eco_format!("failed to parse template ({err})"))?;

    let output = env
        .get_template(&name)
        .and_then(|template| template.render(&context))
        .map_err(|err| eco_format!("failed to render template ({err})"))?;

    write(command.output.as_deref(), &output)?;
    Ok(())
}

/// Reads a UTF-8 text file.
fn read(path: &Path) -> StrResult<String> {
    fs::read_to_string(path)
        .map_err(|err| eco_format!("failed to read {} ({err})", path.display()))
}

/// Loads the template context from a JSON file.
fn load_context(path: &Path) -> HintedStrResult<serde_json::Value> {
    let text = read(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|err| eco_format!("failed to parse {} ({err})", path.display()))?;
    if !value.is_object() {
        bail!(
            "template data in {} is not a JSON object", path.display();
            hint: "top-level keys become the template's variables"
        );
    }
    Ok(value)
}

/// Writes the rendered template to a file or standard output.
fn write(path: Option<&Path>, output: &str) -> StrResult<()> {
    match path {
        Some(path) => fs::write(path, output)
            .map_err(|err| eco_format!("failed to write {} ({err})", path.display())),
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|err| eco_format!("failed to write output ({err})")),
    }
}
