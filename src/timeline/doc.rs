use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    animation::ease::Ease,
    foundation::core::Rgba8,
    foundation::error::{ReelError, ReelResult},
    scene::config::SceneConfig,
};

/// A timeline described as data: scene settings, objects, and playback steps.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineDoc {
    /// Scene settings.
    #[serde(default)]
    pub scene: SceneConfig,
    /// Objects, addressed by name from steps.
    #[serde(default)]
    pub objects: Vec<ObjectDoc>,
    /// Top-level steps, played one after another.
    pub steps: Vec<StepDoc>,
}

/// Render capability selectable from a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderDoc {
    /// Outline / default look.
    #[default]
    Outline,
    /// Outline plus interior.
    Filled,
    /// Nothing drawn.
    Hidden,
}

/// Object declaration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectDoc {
    /// Circle centered on `center`.
    Circle {
        /// Unique name.
        name: String,
        /// Center `[x, y]`.
        center: [f64; 2],
        /// Radius.
        radius: f64,
        /// Ring thickness override.
        #[serde(default)]
        outline_thickness: Option<f64>,
        /// Tessellation override.
        #[serde(default)]
        segments: Option<u32>,
        /// Fill color override.
        #[serde(default)]
        inner_color: Option<Rgba8>,
        /// Ring color override.
        #[serde(default)]
        outline_color: Option<Rgba8>,
        /// Render capability.
        #[serde(default)]
        render: RenderDoc,
    },
    /// Rectangle with its top-left corner at `position`.
    Rectangle {
        /// Unique name.
        name: String,
        /// Top-left `[x, y]`.
        position: [f64; 2],
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Stroke width override.
        #[serde(default)]
        outline_thickness: Option<f64>,
        /// Fill color override.
        #[serde(default)]
        inner_color: Option<Rgba8>,
        /// Outline color override.
        #[serde(default)]
        outline_color: Option<Rgba8>,
        /// Render capability.
        #[serde(default)]
        render: RenderDoc,
    },
    /// Square with its top-left corner at `position`.
    Square {
        /// Unique name.
        name: String,
        /// Top-left `[x, y]`.
        position: [f64; 2],
        /// Side length.
        side: f64,
        /// Stroke width override.
        #[serde(default)]
        outline_thickness: Option<f64>,
        /// Fill color override.
        #[serde(default)]
        inner_color: Option<Rgba8>,
        /// Outline color override.
        #[serde(default)]
        outline_color: Option<Rgba8>,
        /// Render capability.
        #[serde(default)]
        render: RenderDoc,
    },
    /// Text anchored at `position`.
    Text {
        /// Unique name.
        name: String,
        /// Top-left `[x, y]`.
        position: [f64; 2],
        /// Text buffer.
        content: String,
        /// Font size override.
        #[serde(default)]
        font_size: Option<f64>,
        /// Color override.
        #[serde(default)]
        color: Option<Rgba8>,
        /// Font file, loaded through the resource loader.
        #[serde(default)]
        font: Option<PathBuf>,
        /// Seconds per revealed character.
        #[serde(default)]
        reveal_interval: Option<f64>,
    },
    /// Image anchored at `position`.
    Image {
        /// Unique name.
        name: String,
        /// Top-left `[x, y]`.
        position: [f64; 2],
        /// Texture file, loaded through the resource loader.
        source: PathBuf,
        /// Scale override.
        #[serde(default)]
        scale: Option<f64>,
    },
}

impl ObjectDoc {
    /// Declared name.
    pub fn name(&self) -> &str {
        match self {
            Self::Circle { name, .. }
            | Self::Rectangle { name, .. }
            | Self::Square { name, .. }
            | Self::Text { name, .. }
            | Self::Image { name, .. } => name,
        }
    }
}

/// Playback step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepDoc {
    /// Default reveal of an object.
    Reveal {
        /// Optional name, for `replay`.
        #[serde(default)]
        name: Option<String>,
        /// Object name.
        target: String,
        /// Duration override; the kind's natural duration otherwise.
        #[serde(default)]
        duration: Option<f64>,
        /// Easing curve.
        #[serde(default)]
        ease: Ease,
        /// Restore the target on replay.
        #[serde(default)]
        resettable: bool,
    },
    /// Idle time.
    Wait {
        /// Optional name, for `replay`.
        #[serde(default)]
        name: Option<String>,
        /// Seconds to wait.
        duration: f64,
    },
    /// Hide an object.
    Disappear {
        /// Optional name, for `replay`.
        #[serde(default)]
        name: Option<String>,
        /// Object name.
        target: String,
        /// Restore the target on replay.
        #[serde(default)]
        resettable: bool,
    },
    /// Move the target of a wrapped step while playing it.
    Move {
        /// Optional name, for `replay`.
        #[serde(default)]
        name: Option<String>,
        /// Wrapped step; must target an object.
        step: Box<StepDoc>,
        /// Destination `[x, y]`.
        to: [f64; 2],
        /// Motion duration.
        duration: f64,
        /// Motion easing.
        #[serde(default)]
        ease: Ease,
    },
    /// Play several steps in parallel.
    Sync {
        /// Optional name, for `replay`.
        #[serde(default)]
        name: Option<String>,
        /// Parallel children.
        steps: Vec<StepDoc>,
    },
    /// Queue an earlier named step again.
    Replay {
        /// Name of an earlier step.
        step: String,
    },
}

impl StepDoc {
    /// Declared name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Reveal { name, .. }
            | Self::Wait { name, .. }
            | Self::Disappear { name, .. }
            | Self::Move { name, .. }
            | Self::Sync { name, .. } => name.as_deref(),
            Self::Replay { .. } => None,
        }
    }
}

fn check_finite(what: &str, v: f64) -> ReelResult<()> {
    if !v.is_finite() {
        return Err(ReelError::validation(format!("{what} must be finite")));
    }
    Ok(())
}

impl TimelineDoc {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let doc: Self = serde_json::from_str(s).map_err(|e| ReelError::serde(e.to_string()))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Read, parse, and validate a JSON document.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read timeline '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReelError::serde(e.to_string()))
    }

    /// Check names, references, and numeric fields.
    pub fn validate(&self) -> ReelResult<()> {
        self.scene.validate()?;

        let mut objects = BTreeMap::new();
        for obj in &self.objects {
            let name = obj.name();
            if name.is_empty() {
                return Err(ReelError::validation("object name must not be empty"));
            }
            if objects.insert(name, obj).is_some() {
                return Err(ReelError::validation(format!(
                    "duplicate object name '{name}'"
                )));
            }
            if let ObjectDoc::Text {
                reveal_interval: Some(interval),
                ..
            } = obj
            {
                check_finite("text reveal_interval", *interval)?;
            }
        }

        if self.steps.is_empty() {
            return Err(ReelError::validation("timeline has no steps"));
        }
        let mut named = BTreeSet::new();
        for step in &self.steps {
            validate_step(step, &objects, &mut named, true)?;
        }
        Ok(())
    }

    /// Top-level step count, replays included.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

fn validate_step<'a>(
    step: &'a StepDoc,
    objects: &BTreeMap<&str, &ObjectDoc>,
    named: &mut BTreeSet<&'a str>,
    top_level: bool,
) -> ReelResult<()> {
    let known_target = |target: &str| {
        if objects.contains_key(target) {
            Ok(())
        } else {
            Err(ReelError::validation(format!(
                "step targets unknown object '{target}'"
            )))
        }
    };

    match step {
        StepDoc::Reveal {
            target, duration, ..
        } => {
            known_target(target)?;
            if let Some(d) = duration {
                check_finite("reveal duration", *d)?;
            }
        }
        StepDoc::Wait { duration, .. } => check_finite("wait duration", *duration)?,
        StepDoc::Disappear { target, .. } => known_target(target)?,
        StepDoc::Move {
            step: inner,
            duration,
            to,
            ..
        } => {
            check_finite("move duration", *duration)?;
            check_finite("move destination x", to[0])?;
            check_finite("move destination y", to[1])?;
            if matches!(**inner, StepDoc::Sync { .. } | StepDoc::Replay { .. }) {
                return Err(ReelError::validation(
                    "move must wrap a step that targets an object",
                ));
            }
            validate_step(inner, objects, named, false)?;
        }
        StepDoc::Sync { steps, .. } => {
            if steps.is_empty() {
                return Err(ReelError::validation("sync needs at least one step"));
            }
            for child in steps {
                if matches!(child, StepDoc::Replay { .. }) {
                    return Err(ReelError::validation(
                        "replay is only allowed at the top level",
                    ));
                }
                validate_step(child, objects, named, false)?;
            }
        }
        StepDoc::Replay { step: name } => {
            if !top_level {
                return Err(ReelError::validation(
                    "replay is only allowed at the top level",
                ));
            }
            if !named.contains(name.as_str()) {
                return Err(ReelError::validation(format!(
                    "replay refers to unknown or later step '{name}'"
                )));
            }
        }
    }

    if let Some(name) = step.name() {
        if !named.insert(name) {
            return Err(ReelError::validation(format!(
                "duplicate step name '{name}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/doc.rs"]
mod tests;
