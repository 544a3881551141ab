use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};
use faicon::{FsIcons, IconRenderer, RenderOptions};

/// Renders Font Awesome icons as inline SVG.
#[derive(Debug, Clone, Parser)]
#[clap(name = "faicon", version, author)]
pub struct CliArguments {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,

    /// Sets the level of logging verbosity:
    /// -v = warning & error, -vv = info, -vvv = debug, -vvvv = trace
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Whether to use color when printing errors
    #[clap(long, default_value_t = ColorChoice::Auto, global = true)]
    pub diagnostics_color: ColorChoice,
}

/// What to do.
#[derive(Debug, Clone, Subcommand)]
#[command()]
pub enum Command {
    /// Prints the markup of one or more icons
    #[command(visible_alias = "r")]
    Render(RenderCommand),

    /// Renders a template in which the `fa` function is available
    #[command(visible_alias = "t")]
    Template(TemplateCommand),
}

/// Prints the markup of one or more icons
#[derive(Debug, Clone, Parser)]
pub struct RenderCommand {
    /// Shared arguments.
    #[clap(flatten)]
    pub shared: SharedArgs,

    /// Icon names, like `smile-beam`, `fa-smile-beam`, or `"far smile-beam"`
    #[arg(required = true, value_name = "ICON")]
    pub icons: Vec<String>,

    /// Width and height of the icons in pixels
    #[arg(long)]
    pub size: Option<String>,

    /// CSS color to fill the icons with
    #[arg(long)]
    pub color: Option<String>,

    /// Extra CSS classes, appended after the base class
    #[arg(long)]
    pub class: Option<String>,
}

impl RenderCommand {
    /// The render options selected on the command line.
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            size: self.size.as_deref().unwrap_or_default().into(),
            color: self.color.as_deref().unwrap_or_default().into(),
            class: self.class.as_deref().unwrap_or_default().into(),
        }
    }
}

/// Renders a template in which the `fa` function is available
#[derive(Debug, Clone, Parser)]
pub struct TemplateCommand {
    /// Shared arguments.
    #[clap(flatten)]
    pub shared: SharedArgs,

    /// Path to the minijinja template
    pub input: PathBuf,

    /// Path to a JSON file holding the template context
    #[arg(long, value_name = "JSON")]
    pub data: Option<PathBuf>,

    /// Path to the output file, standard output if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Common arguments of render and template.
#[derive(Debug, Clone, Args)]
pub struct SharedArgs {
    /// The Font Awesome directory containing `svgs/`. Defaults to
    /// `vendor/fortawesome/font-awesome` in the current directory
    #[clap(long = "root", env = "FAICON_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl SharedArgs {
    /// The icon store selected by these arguments.
    pub fn icons(&self) -> FsIcons {
        match &self.root {
            Some(root) => FsIcons::new(root),
            None => FsIcons::vendored("."),
        }
    }

    /// Creates a renderer serving icons from the selected store.
    pub fn renderer(&self) -> IconRenderer {
        let icons = self.icons();
        tracing::info!(root = %icons.root().display(), "serving icons");
        IconRenderer::new(icons)
    }
}
