use std::path::PathBuf;

use anyhow::{Context, Result};
use plotrc::{Figure, Loc};
use tracing::info;

use crate::cli::{Cli, RenderArgs};
use crate::input::FieldDocument;

pub fn run(_cli: &Cli, args: &RenderArgs) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| PathBuf::from("field.svg"));

    let doc = FieldDocument::load(&args.input)?;
    let field = doc.field.build()
        .with_context(|| format!("[render] Could not build field from {}", args.input.display()))?;

    let mut figure = Figure::new(args.width, args.height);
    figure.add_field(&field, doc.style).context("[render] Could not draw field")?;

    if let Some(text) = &args.watermark {
        figure.add_watermark(text, args.watermark_size);
    }

    if let Some(text) = &args.label {
        let loc = args.label_loc.parse::<Loc>()?;
        figure.add_anchor(text, loc);
    }

    figure.save(&output)?;
    info!(output = %output.display(), "wrote figure");

    Ok(())
}
