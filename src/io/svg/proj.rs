use geo::{Coord, Rect};

/// Maps data coordinates into SVG space, preserving aspect and flipping Y.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Projection {
    view: Rect<f64>,
    margin: f64,
    scale: f64,
}

impl Projection {
    /// Fit `view` into a `width`×`height` canvas with `margin` on every side.
    pub(crate) fn fit(view: Rect<f64>, width: f64, height: f64, margin: f64) -> Self {
        let sx = (width - 2.0 * margin) / view.width();
        let sy = (height - 2.0 * margin) / view.height();
        let scale = match (sx.is_finite(), sy.is_finite()) {
            (true, true) => sx.min(sy),
            (true, false) => sx,
            (false, true) => sy,
            (false, false) => 1.0,
        };
        Self { view, margin, scale }
    }

    #[inline]
    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let x = self.margin + (coord.x - self.view.min().x) * self.scale;
        let y = self.margin + (self.view.max().y - coord.y) * self.scale; // invert vertically
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_inside_margin_with_y_down() {
        let view = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 5.0 });
        let proj = Projection::fit(view, 120.0, 120.0, 10.0);
        assert_eq!(proj.project(&Coord { x: 0.0, y: 5.0 }), (10.0, 10.0));
        assert_eq!(proj.project(&Coord { x: 10.0, y: 0.0 }), (110.0, 60.0));
    }

    #[test]
    fn degenerate_view_keeps_unit_scale() {
        let view = Rect::new(Coord { x: 1.0, y: 1.0 }, Coord { x: 1.0, y: 1.0 });
        let proj = Projection::fit(view, 100.0, 100.0, 0.0);
        assert_eq!(proj.project(&Coord { x: 2.0, y: 1.0 }), (1.0, 0.0));
    }
}
