use std::io::{self, Write};

use anyhow::{Context, Result};
use plotrc::PathCommand;
use tracing::info;

use crate::cli::{Cli, PathArgs};
use crate::input::FieldDocument;

pub fn run(_cli: &Cli, args: &PathArgs) -> Result<()> {
    let doc = FieldDocument::load(&args.input)?;
    let field = doc.field.build()
        .with_context(|| format!("[path] Could not build field from {}", args.input.display()))?;

    info!(parts = field.region().len(), area = field.area(), "normalised field");

    let commands = field.to_path().context("[path] Nothing to draw")?;

    let mut out = io::stdout().lock();
    for command in commands {
        match command {
            PathCommand::MoveTo(c) => writeln!(out, "M {} {}", c.x, c.y)?,
            PathCommand::LineTo(c) => writeln!(out, "L {} {}", c.x, c.y)?,
            PathCommand::Close(c) => writeln!(out, "Z {} {}", c.x, c.y)?,
        }
    }

    Ok(())
}
