use std::io::{self, Write};

use ecow::eco_format;
use faicon::diag::HintedStrResult;

use crate::args::RenderCommand;

/// Execute a render command.
///
/// All icons share one renderer, so an icon given twice is only defined once.
pub fn render(command: &RenderCommand) -> HintedStrResult<()> {
    let renderer = command.shared.renderer();
    let options = command.options();

    let mut out = io::stdout().lock();
    for icon in &command.icons {
        let markup = renderer.render(icon, &options)?;
        writeln!(out, "{markup}")
            .map_err(|err| eco_format!("failed to write output ({err})"))?;
    }

    tracing::info!(symbols = renderer.cache().len(), "rendered icons");
    Ok(())
}
