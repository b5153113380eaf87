use geo::{Coord, LineString};

use crate::error::FieldError;

use super::Region;

/// One drawing instruction of a flattened path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Coord<f64>),
    LineTo(Coord<f64>),
    /// Terminates the current ring at its closing point.
    Close(Coord<f64>),
}

impl PathCommand {
    #[inline]
    pub fn coord(&self) -> Coord<f64> {
        match *self {
            Self::MoveTo(c) | Self::LineTo(c) | Self::Close(c) => c,
        }
    }
}

/// Flatten every ring of `region` (exterior first, then holes, per polygon) into path commands.
pub(crate) fn region_to_path(region: &Region) -> Result<Vec<PathCommand>, FieldError> {
    if region.is_empty() { return Err(FieldError::EmptyGeometry) }

    let mut commands = Vec::new();
    for polygon in region.polygons() {
        for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
            append_ring(ring, &mut commands);
        }
    }

    Ok(commands)
}

/// Append a closed ring: move to the first point, line through the interior points, close on the last.
fn append_ring(ring: &LineString<f64>, commands: &mut Vec<PathCommand>) {
    let Some((first, rest)) = ring.0.split_first() else { return };
    let Some((last, middle)) = rest.split_last() else { return };

    commands.push(PathCommand::MoveTo(*first));
    commands.extend(middle.iter().map(|&c| PathCommand::LineTo(c)));
    commands.push(PathCommand::Close(*last));
}
