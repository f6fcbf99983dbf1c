use crate::{
    foundation::core::{Point, Rgba8},
    render::ops::DrawOp,
};

/// Circle drawn as an outline ring that sweeps clockwise into view.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    /// Radius of the ring's centerline.
    pub radius: f64,
    /// Ring thickness.
    pub outline_thickness: f64,
    /// Tessellation hint for the backend.
    pub segments: u32,
    /// Interior color (used by [`crate::Render::Filled`]).
    pub inner_color: Rgba8,
    /// Ring color.
    pub outline_color: Rgba8,
    sweep_deg: f64,
}

impl Circle {
    /// Circle with the default look: 25px blue ring, 100 segments.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            outline_thickness: 25.0,
            segments: 100,
            inner_color: Rgba8::BLUE,
            outline_color: Rgba8::DARKBLUE,
            sweep_deg: 0.0,
        }
    }

    /// Currently revealed arc in degrees, `0..=360`.
    pub fn sweep_deg(&self) -> f64 {
        self.sweep_deg
    }

    pub(crate) fn reveal(&mut self, t: f64) {
        self.sweep_deg = t.clamp(0.0, 1.0) * 360.0;
    }

    pub(crate) fn draw(&self, center: Point, filled: bool, out: &mut Vec<DrawOp>) {
        if self.sweep_deg <= 0.0 {
            return;
        }
        let half = self.outline_thickness / 2.0;
        if filled {
            out.push(DrawOp::Sector {
                center,
                radius: self.radius + half,
                start_deg: 0.0,
                end_deg: self.sweep_deg,
                segments: self.segments,
                color: self.outline_color,
            });
            out.push(DrawOp::Sector {
                center,
                radius: (self.radius - half).max(0.0),
                start_deg: 0.0,
                end_deg: self.sweep_deg,
                segments: self.segments,
                color: self.inner_color,
            });
        } else {
            out.push(DrawOp::Ring {
                center,
                inner_radius: (self.radius - half).max(0.0),
                outer_radius: self.radius + half,
                start_deg: 0.0,
                end_deg: self.sweep_deg,
                segments: self.segments,
                color: self.outline_color,
            });
        }
    }
}

/// Rectangle revealed by tracing its perimeter one side per quarter of the animation.
///
/// Sides are traced clockwise from the top-left corner: top, right, bottom, left.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Stroke width of the perimeter.
    pub outline_thickness: f64,
    /// Interior color (used by [`crate::Render::Filled`]).
    pub inner_color: Rgba8,
    /// Perimeter color.
    pub outline_color: Rgba8,
    sides: [f64; 4],
}

impl Rectangle {
    /// Rectangle with the default look: 25px green outline.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            outline_thickness: 25.0,
            inner_color: Rgba8::GREEN,
            outline_color: Rgba8::DARKGREEN,
            sides: [0.0; 4],
        }
    }

    /// Square with the default look.
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Reveal fraction of each side (top, right, bottom, left), each in `[0, 1]`.
    pub fn sides(&self) -> [f64; 4] {
        self.sides
    }

    pub(crate) fn reveal(&mut self, t: f64) {
        let quarters = t.clamp(0.0, 1.0) * 4.0;
        for (i, side) in self.sides.iter_mut().enumerate() {
            *side = (quarters - i as f64).clamp(0.0, 1.0);
        }
    }

    pub(crate) fn draw(&self, origin: Point, filled: bool, out: &mut Vec<DrawOp>) {
        let (x, y, w, h) = (origin.x, origin.y, self.width, self.height);
        let [top, right, bottom, left] = self.sides;
        let top_left = Point::new(x, y);

        if filled {
            // Fan from the top-left corner over the traced part of the perimeter.
            if right > 0.0 {
                out.push(DrawOp::Triangle {
                    a: top_left,
                    b: Point::new(x + w, y + h * right),
                    c: Point::new(x + w, y),
                    color: self.inner_color,
                });
            }
            if bottom > 0.0 {
                out.push(DrawOp::Triangle {
                    a: top_left,
                    b: Point::new(x + w - w * bottom, y + h),
                    c: Point::new(x + w, y + h),
                    color: self.inner_color,
                });
            }
        }

        let segments = [
            (top, top_left, Point::new(x + w * top, y)),
            (
                right,
                Point::new(x + w, y),
                Point::new(x + w, y + h * right),
            ),
            (
                bottom,
                Point::new(x + w, y + h),
                Point::new(x + w - w * bottom, y + h),
            ),
            (left, Point::new(x, y + h), Point::new(x, y + h - h * left)),
        ];
        for (fraction, from, to) in segments {
            if fraction <= 0.0 {
                continue;
            }
            out.push(DrawOp::Line {
                from,
                to,
                thickness: self.outline_thickness,
                color: self.outline_color,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/shapes.rs"]
mod tests;
