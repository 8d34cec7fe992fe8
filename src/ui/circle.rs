use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle},
        Widget,
    },
};

/// Half height of the canvas in radius units; the largest breath fills it
const HALF_EXTENT: f64 = 130.0;
/// Spacing of the concentric rings that fill the disc
const RING_STEP: f64 = 3.0;

/// A filled disc centred in its area
#[derive(Debug, Clone, Copy)]
pub struct BreathCircle {
    pub radius: f64,
    pub color: Color,
}

impl BreathCircle {
    pub fn new(radius: f64, color: Color) -> Self {
        Self { radius, color }
    }

    /// Canvas x bounds that keep braille dots square for this area
    fn half_width(area: Rect) -> f64 {
        if area.height == 0 {
            return HALF_EXTENT;
        }
        let dots_wide = f64::from(area.width) * 2.0;
        let dots_high = f64::from(area.height) * 4.0;
        HALF_EXTENT * dots_wide / dots_high
    }
}

impl Widget for BreathCircle {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let half_width = Self::half_width(area);
        let radius = self.radius.clamp(0.0, HALF_EXTENT);
        let color = self.color;

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-half_width, half_width])
            .y_bounds([-HALF_EXTENT, HALF_EXTENT])
            .paint(move |ctx| {
                let mut r = radius;
                while r > 0.0 {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: r,
                        color,
                    });
                    r -= RING_STEP;
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted_cells(radius: f64) -> usize {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        BreathCircle::new(radius, Color::Cyan).render(area, &mut buf);
        buf.content.iter().filter(|c| c.symbol() != " ").count()
    }

    #[test]
    fn test_bigger_radius_paints_more() {
        let small = painted_cells(50.0);
        let large = painted_cells(120.0);
        assert!(small > 0);
        assert!(large > small);
    }

    #[test]
    fn test_zero_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        BreathCircle::new(80.0, Color::Cyan).render(area, &mut buf);
    }

    #[test]
    fn test_square_dots() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(BreathCircle::half_width(area), HALF_EXTENT);
    }
}
