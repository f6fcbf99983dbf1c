use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::core::{Canvas, Rgba8},
    foundation::error::{ReelError, ReelResult},
};

/// Presentation settings of a scene. None of these affect scheduling.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Window title.
    pub title: String,
    /// Canvas size in pixels.
    pub canvas: Canvas,
    /// Clear color.
    pub background: Rgba8,
    /// Frame rate the playback loop aims for.
    pub target_fps: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "reelkit".to_owned(),
            canvas: Canvas {
                width: 2400,
                height: 1600,
            },
            background: Rgba8::OFF_WHITE,
            target_fps: 120,
        }
    }
}

impl SceneConfig {
    /// Default config with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Check canvas and frame-rate values.
    pub fn validate(&self) -> ReelResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if self.target_fps == 0 {
            return Err(ReelError::validation("target_fps must be > 0"));
        }
        Ok(())
    }

    /// Seconds per frame at [`Self::target_fps`].
    pub fn frame_step(&self) -> f64 {
        1.0 / f64::from(self.target_fps.max(1))
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let config: Self = serde_json::from_str(s).map_err(|e| ReelError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
