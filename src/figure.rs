//! Figures: fields drawn as patches, plus watermark and anchored text decorations.

use std::{collections::BTreeMap, io::Write, path::Path, str::FromStr};

use anyhow::Result;
use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FieldError;
use crate::field::{Field, PathCommand};
use crate::io::svg::{
    cycle_color, escape_xml, path_data, write_svg_footer, write_svg_header, write_svg_styles,
    Projection, Rgb, SvgStringWriter, SvgWriter,
};

/// SVG presentation attributes, written onto the render primitive verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    pub fn new() -> Self { Self::default() }

    /// Builder-style [`Style::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> { self.0.get(key).map(String::as_str) }

    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Overlay `other` on top of `self`.
    fn merged(mut self, other: &Style) -> Self {
        self.0.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    fn to_attrs(&self) -> String {
        self.0.iter()
            .map(|(k, v)| format!(r#" {}="{}""#, escape_xml(k), escape_xml(v)))
            .collect()
    }
}

/// Where an anchored text box sits on the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Loc {
    #[default]
    UpperRight,
    UpperCenter,
    UpperLeft,
    CenterLeft,
    Center,
    CenterRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

impl Loc {
    /// Horizontal and vertical placement, each in {-1, 0, 1} (left/top = -1).
    fn placement(&self) -> (i8, i8) {
        match self {
            Self::UpperRight => (1, -1),
            Self::UpperCenter => (0, -1),
            Self::UpperLeft => (-1, -1),
            Self::CenterLeft => (-1, 0),
            Self::Center => (0, 0),
            Self::CenterRight => (1, 0),
            Self::LowerLeft => (-1, 1),
            Self::LowerCenter => (0, 1),
            Self::LowerRight => (1, 1),
        }
    }
}

impl FromStr for Loc {
    type Err = FieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "upper right" => Ok(Self::UpperRight),
            "upper center" => Ok(Self::UpperCenter),
            "upper left" => Ok(Self::UpperLeft),
            "center left" | "left" => Ok(Self::CenterLeft),
            "center" => Ok(Self::Center),
            "center right" | "right" => Ok(Self::CenterRight),
            "lower left" => Ok(Self::LowerLeft),
            "lower center" => Ok(Self::LowerCenter),
            "lower right" => Ok(Self::LowerRight),
            _ => Err(FieldError::UnknownLocation(name.to_string())),
        }
    }
}

const ANCHOR_FONT_SIZE: f64 = 12.0;

#[derive(Debug, Clone)]
struct Patch {
    commands: Vec<PathCommand>,
    style: Style,
}

#[derive(Debug, Clone)]
enum Text {
    Watermark { text: String, font_size: f64 },
    Anchor { text: String, loc: Loc, font_size: f64 },
}

/// A canvas of fixed pixel size holding patches and text decorations.
#[derive(Debug, Clone)]
pub struct Figure {
    width: f64,
    height: f64,
    margin: f64,
    view: Option<Rect<f64>>,
    autoscale: bool,
    patches: Vec<Patch>,
    texts: Vec<Text>,
}

impl Figure {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, margin: 10.0, view: None, autoscale: true, patches: Vec::new(), texts: Vec::new() }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Fix the data-space view; later fields no longer rescale it.
    pub fn set_view(&mut self, view: Rect<f64>) -> &mut Self {
        self.view = Some(view);
        self.autoscale = false;
        self
    }

    /// Current data-space view, if any field or explicit view set it.
    #[inline] pub fn view(&self) -> Option<Rect<f64>> { self.view }

    #[inline] pub fn num_patches(&self) -> usize { self.patches.len() }

    /// Draw `field` as one path patch. Unless the view is fixed, it grows to include the field.
    pub fn add_field(&mut self, field: impl AsRef<Field>, style: Style) -> Result<&mut Self, FieldError> {
        let field = field.as_ref();
        let commands = field.to_path()?;

        if self.autoscale {
            if let Some(bounds) = field.bounds() {
                self.view = Some(match self.view {
                    Some(view) => Rect::new(
                        Coord { x: view.min().x.min(bounds.min().x), y: view.min().y.min(bounds.min().y) },
                        Coord { x: view.max().x.max(bounds.max().x), y: view.max().y.max(bounds.max().y) },
                    ),
                    None => bounds,
                });
            }
        }

        let color = cycle_color(self.patches.len()).to_string();
        let style = Style::new()
            .with("fill", color.clone())
            .with("fill-opacity", "0.5")
            .with("stroke", color)
            .with("stroke-width", "1")
            .merged(&style);

        debug!(commands = commands.len(), composite = field.is_composite(), "added field patch");
        self.patches.push(Patch { commands, style });
        Ok(self)
    }

    /// Large translucent diagonal text across the middle of the figure.
    pub fn add_watermark(&mut self, text: &str, font_size: f64) -> &mut Self {
        self.texts.push(Text::Watermark { text: text.to_string(), font_size });
        self
    }

    /// Text in a rounded box anchored to one of the figure's edges or corners.
    pub fn add_anchor(&mut self, text: &str, loc: Loc) -> &mut Self {
        self.texts.push(Text::Anchor { text: text.to_string(), loc, font_size: ANCHOR_FONT_SIZE });
        self
    }

    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        self.write_to(&mut writer)?;
        writer.into_string()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = SvgWriter::new(path)?;
        self.write_to(&mut writer)?;
        writer.flush()?;
        debug!(path = %path.display(), "saved figure");
        Ok(())
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_svg_header(writer, self.width, self.height)?;
        write_svg_styles(writer)?;

        let view = self.view.unwrap_or(Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }));
        let proj = Projection::fit(view, self.width, self.height, self.margin);
        for patch in &self.patches {
            writeln!(writer, r#"<path class="field" fill-rule="evenodd" d="{}"{}/>"#,
                path_data(&patch.commands, &proj),
                patch.style.to_attrs(),
            )?;
        }

        for text in &self.texts {
            match text {
                Text::Watermark { text, font_size } => self.write_watermark(writer, text, *font_size)?,
                Text::Anchor { text, loc, font_size } => self.write_anchor(writer, text, *loc, *font_size)?,
            }
        }

        write_svg_footer(writer)
    }

    fn write_watermark<W: Write>(&self, writer: &mut W, text: &str, font_size: f64) -> Result<()> {
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        // SVG rotates clockwise, so -30 tilts the text up to the right
        writeln!(writer,
            r#"<text class="watermark" x="{cx}" y="{cy}" font-size="{font_size}" fill="{}" fill-opacity="0.5" transform="rotate(-30 {cx} {cy})">{}</text>"#,
            Rgb::GRAY,
            escape_xml(text),
        )?;
        Ok(())
    }

    fn write_anchor<W: Write>(&self, writer: &mut W, text: &str, loc: Loc, font_size: f64) -> Result<()> {
        let pad = 0.4 * font_size;
        let border = 0.5 * font_size;
        // rough glyph width for a sans-serif face
        let box_w = text.chars().count() as f64 * 0.6 * font_size + 2.0 * pad;
        let box_h = 1.2 * font_size + 2.0 * pad;

        let (h, v) = loc.placement();
        let x = match h {
            -1 => border,
            0 => (self.width - box_w) / 2.0,
            _ => self.width - border - box_w,
        };
        let y = match v {
            -1 => border,
            0 => (self.height - box_h) / 2.0,
            _ => self.height - border - box_h,
        };

        writeln!(writer,
            r#"<rect class="anchor-box" x="{x:.3}" y="{y:.3}" width="{box_w:.3}" height="{box_h:.3}" rx="{:.3}" fill="{}" stroke="{}"/>"#,
            0.2 * font_size,
            Rgb::WHITE,
            Rgb::BLACK,
        )?;
        writeln!(writer,
            r#"<text class="anchor" x="{:.3}" y="{:.3}" font-size="{font_size}">{}</text>"#,
            x + pad,
            y + box_h / 2.0,
            escape_xml(text),
        )?;
        Ok(())
    }
}
