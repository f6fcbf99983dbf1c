use crate::{
    animation::model::Progress,
    foundation::core::{Point, Rgba8},
    render::ops::DrawOp,
    resources::loader::{FontHandle, TextureHandle},
};

/// Text revealed one character at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    /// Full text buffer.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Text color.
    pub color: Rgba8,
    /// Loaded font, or the backend default.
    pub font: Option<FontHandle>,
    /// Seconds between two revealed characters.
    pub reveal_interval: f64,
    visible_chars: usize,
}

impl Text {
    /// Default reveal pace in seconds per character.
    pub const DEFAULT_REVEAL_INTERVAL: f64 = 0.05;

    /// Black 40px text with the default reveal pace.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: 40.0,
            color: Rgba8::BLACK,
            font: None,
            reveal_interval: Self::DEFAULT_REVEAL_INTERVAL,
            visible_chars: 0,
        }
    }

    /// Number of characters in the buffer.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Number of characters currently revealed.
    pub fn visible_chars(&self) -> usize {
        self.visible_chars
    }

    /// The revealed prefix of the buffer.
    pub fn visible_text(&self) -> &str {
        match self.content.char_indices().nth(self.visible_chars) {
            Some((end, _)) => &self.content[..end],
            None => &self.content,
        }
    }

    /// Duration that reveals every character at the configured pace.
    pub fn natural_duration(&self) -> f64 {
        self.char_count() as f64 * self.reveal_interval.max(0.0)
    }

    /// Move the reveal cursor to eased progress `p.t`.
    ///
    /// With a positive interval one character appears per interval of eased time
    /// (`p.t * p.duration`); otherwise the count is proportional to `p.t`.
    pub(crate) fn reveal(&mut self, p: &Progress) {
        let total = self.char_count();
        self.visible_chars = if p.t >= 1.0 {
            total
        } else if self.reveal_interval > 0.0 {
            let eased_secs = p.t * p.duration.max(0.0);
            // Absorbs the rounding of elapsed / duration * duration.
            let steps = (eased_secs / self.reveal_interval + 1e-9).floor();
            (steps.max(0.0) as usize).min(total)
        } else {
            ((total as f64 * p.t).floor() as usize).min(total)
        };
    }

    pub(crate) fn draw(&self, origin: Point, out: &mut Vec<DrawOp>) {
        if self.visible_chars == 0 {
            return;
        }
        out.push(DrawOp::Text {
            origin,
            text: self.visible_text().to_owned(),
            font_size: self.font_size,
            font: self.font,
            color: self.color,
        });
    }
}

/// Texture revealed by fading in.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    /// Loaded texture.
    pub texture: TextureHandle,
    /// Uniform scale factor.
    pub scale: f64,
    /// Tint color; its alpha is multiplied by the current opacity.
    pub tint: Rgba8,
    opacity: f64,
}

impl Image {
    /// Untinted, unscaled, fully transparent image.
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture,
            scale: 1.0,
            tint: Rgba8::WHITE,
            opacity: 0.0,
        }
    }

    /// Current opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub(crate) fn reveal(&mut self, t: f64) {
        self.opacity = t.clamp(0.0, 1.0);
    }

    pub(crate) fn draw(&self, origin: Point, out: &mut Vec<DrawOp>) {
        if self.opacity <= 0.0 {
            return;
        }
        out.push(DrawOp::Texture {
            texture: self.texture,
            origin,
            scale: self.scale,
            tint: self.tint.fade(self.opacity),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/media.rs"]
mod tests;
