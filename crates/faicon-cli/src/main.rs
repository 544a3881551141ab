use std::process::ExitCode;

use faicon::diag::HintedStrResult;

use faicon_cli::args::Command;
use faicon_cli::{ARGS, EXIT, print_error, set_failed};

/// Entry point.
fn main() -> ExitCode {
    faicon_cli::trace::setup_tracing(&ARGS);

    let res = dispatch();

    if let Err(err) = res {
        set_failed();
        print_error(&err).expect("failed to print error");
    }

    EXIT.with(|cell| cell.get())
}

/// Execute the requested command.
fn dispatch() -> HintedStrResult<()> {
    match &ARGS.command {
        Command::Render(command) => faicon_cli::render::render(command)?,
        Command::Template(command) => faicon_cli::template::template(command)?,
    }

    Ok(())
}
