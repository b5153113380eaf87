use std::fmt::Write as _;

use crate::field::PathCommand;

use super::Projection;

/// Build a compact SVG path string from flattened path commands.
pub(crate) fn path_data(commands: &[PathCommand], proj: &Projection) -> String {
    let mut out = String::new();

    for command in commands {
        let (x, y) = proj.project(&command.coord());
        match command {
            PathCommand::MoveTo(_) => { let _ = write!(out, " M{x:.3},{y:.3}"); }
            PathCommand::LineTo(_) => { let _ = write!(out, " L{x:.3},{y:.3}"); }
            // the closing vertex repeats the ring start
            PathCommand::Close(_) => out.push('Z'),
        }
    }

    out.trim_start().to_string()
}

/// Escape text for use in SVG content or attribute values.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
