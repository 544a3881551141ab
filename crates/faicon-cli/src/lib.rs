pub mod args;
pub mod render;
pub mod template;
pub mod trace;

use std::cell::Cell;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use faicon::diag::HintedString;
use once_cell::sync::Lazy;

use crate::args::CliArguments;

thread_local! {
    /// The CLI's exit code.
    pub static EXIT: Cell<ExitCode> = const { Cell::new(ExitCode::SUCCESS) };
}

/// The parsed commandline arguments.
pub static ARGS: Lazy<CliArguments> = Lazy::new(CliArguments::parse);

/// Ensure a failure exit code.
pub fn set_failed() {
    EXIT.with(|cell| cell.set(ExitCode::FAILURE));
}

/// The stream diagnostics are written to, colored if supported.
pub fn stderr(color: clap::ColorChoice) -> StandardStream {
    let choice = match color {
        clap::ColorChoice::Auto if io::stderr().is_terminal() => ColorChoice::Auto,
        clap::ColorChoice::Always => ColorChoice::Always,
        _ => ColorChoice::Never,
    };
    StandardStream::stderr(choice)
}

/// Print an application-level error along with its hints.
pub fn print_error(err: &HintedString) -> io::Result<()> {
    let styles = term::Styles::default();
    let mut output = stderr(ARGS.diagnostics_color);

    output.set_color(&styles.header_error)?;
    write!(output, "error")?;
    output.reset()?;
    writeln!(output, ": {}", err.message())?;

    for hint in err.hints() {
        output.set_color(&styles.header_help)?;
        write!(output, "  = hint")?;
        output.reset()?;
        writeln!(output, ": {hint}")?;
    }

    Ok(())
}
