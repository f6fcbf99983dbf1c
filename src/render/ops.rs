use crate::{
    foundation::core::{Point, Rgba8},
    resources::loader::{FontHandle, TextureHandle},
};

/// Backend-agnostic draw command emitted by an object's render capability.
///
/// Angles are in degrees, measured clockwise from the positive x axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Annulus segment between two radii.
    Ring {
        /// Center point.
        center: Point,
        /// Inner radius.
        inner_radius: f64,
        /// Outer radius.
        outer_radius: f64,
        /// Start angle.
        start_deg: f64,
        /// End angle.
        end_deg: f64,
        /// Tessellation hint.
        segments: u32,
        /// Fill color.
        color: Rgba8,
    },
    /// Filled pie slice.
    Sector {
        /// Center point.
        center: Point,
        /// Radius.
        radius: f64,
        /// Start angle.
        start_deg: f64,
        /// End angle.
        end_deg: f64,
        /// Tessellation hint.
        segments: u32,
        /// Fill color.
        color: Rgba8,
    },
    /// Thick line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width.
        thickness: f64,
        /// Stroke color.
        color: Rgba8,
    },
    /// Filled triangle.
    Triangle {
        /// First vertex.
        a: Point,
        /// Second vertex.
        b: Point,
        /// Third vertex.
        c: Point,
        /// Fill color.
        color: Rgba8,
    },
    /// Text run anchored at its top-left corner.
    Text {
        /// Top-left anchor.
        origin: Point,
        /// Characters to draw.
        text: String,
        /// Font size in pixels.
        font_size: f64,
        /// Loaded font, or the backend default.
        font: Option<FontHandle>,
        /// Text color.
        color: Rgba8,
    },
    /// Loaded texture blitted at its top-left corner.
    Texture {
        /// Loaded texture.
        texture: TextureHandle,
        /// Top-left anchor.
        origin: Point,
        /// Uniform scale factor.
        scale: f64,
        /// Tint, alpha carries the current opacity.
        tint: Rgba8,
    },
}

/// Everything the renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    /// Clear color.
    pub background: Rgba8,
    /// Draw commands in painter's order.
    pub ops: Vec<DrawOp>,
}

impl Frame {
    /// Empty frame with the given clear color.
    pub fn new(background: Rgba8) -> Self {
        Self {
            background,
            ops: Vec::new(),
        }
    }
}
