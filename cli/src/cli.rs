use std::path::PathBuf;

/// Interactive plotting helpers
#[derive(clap::Parser, Debug)]
#[command(name = "plotrc", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the normalised field boundary as path commands
    Path(PathArgs),

    /// Draw the field onto an SVG figure
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Field description (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Field description (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output SVG file, defaults to "./field.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 800.0)]
    pub width: f64,

    /// Figure height in pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,

    /// Diagonal watermark text, e.g. DRAFT
    #[arg(long)]
    pub watermark: Option<String>,

    /// Watermark font size
    #[arg(long, default_value_t = 40.0)]
    pub watermark_size: f64,

    /// Text for an anchored label box
    #[arg(long)]
    pub label: Option<String>,

    /// Label position, e.g. "upper right", "lower left"
    #[arg(long, default_value = "upper right")]
    pub label_loc: String,
}
