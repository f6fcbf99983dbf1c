//! reelkit is a programmatic animation-timeline engine.
//!
//! Callers build visual objects and time-bounded animations on a [`Stage`], queue the
//! animations on a [`Scene`], and drive the scene from a frame loop. Every frame the
//! scene advances exactly one top-level animation and then lists draw commands for the
//! objects that have been activated so far.
//!
//! # Model overview
//!
//! 1. **Stage**: append-only arena owning every [`Object`] and [`Animation`]; callers
//!    hold [`ObjectRef`]/[`AnimRef`] handles.
//! 2. **Scene**: FIFO [`AnimationQueue`], draw-ordered [`ObjectRegistry`], and the
//!    single current animation. [`Scene::update`] activates and advances;
//!    [`Scene::render`] produces a backend-agnostic [`Frame`].
//! 3. **Composites**: sync groups run children in parallel; moves translate the
//!    wrapped animation's target while driving it.
//! 4. **Playback**: [`Player`] pairs a [`Clock`] with a [`RenderBackend`].
//!
//! Timelines can also be written as JSON ([`TimelineDoc`]) and built in one call.
//!
//! # Example
//!
//! ```
//! use reelkit::{Point, Scene, SceneConfig, Stage};
//!
//! let mut stage = Stage::new();
//! let circle = stage.circle(Point::new(800.0, 500.0), 200.0)?;
//! let pause = stage.wait(1.0)?;
//! let reveal = stage.animate_for(circle, 1.0)?;
//!
//! let mut scene = Scene::new(SceneConfig::titled("demo"))?;
//! scene.play(pause);
//! scene.play(reveal);
//!
//! while !scene.is_finished() {
//!     scene.update(&mut stage, 0.25)?;
//!     let _frame = scene.render(&stage)?;
//! }
//! assert_eq!(stage.object(circle).unwrap().as_circle().unwrap().sweep_deg(), 360.0);
//! # Ok::<(), reelkit::ReelError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod object;
mod playback;
mod render;
mod resources;
mod scene;
mod stage;
mod timeline;

pub use animation::ease::Ease;
pub use animation::model::{Animation, AnimationKind, Interp, InterpFn, MoveSpec, Progress};
pub use foundation::core::{Canvas, Lerp, Point, Rgba8, Vec2};
pub use foundation::error::{ReelError, ReelResult};
pub use foundation::ids::{AnimationId, IdAllocator, ObjectId};
pub use object::media::{Image, Text};
pub use object::model::{Object, ObjectKind, Render, RenderFn};
pub use object::shapes::{Circle, Rectangle};
pub use playback::clock::{Clock, FixedStepClock, SystemClock};
pub use playback::player::{PlaybackStats, Player, PlayerOptions};
pub use render::backend::{RecordingBackend, RenderBackend, execute_frame};
pub use render::ops::{DrawOp, Frame};
pub use resources::loader::{FontHandle, NullLoader, ResourceLoader, TextureHandle};
pub use scene::config::SceneConfig;
pub use scene::queue::AnimationQueue;
pub use scene::registry::ObjectRegistry;
pub use scene::scheduler::{Scene, UpdateReport};
pub use stage::arena::{
    AnimRef, DEFAULT_IMAGE_DURATION, DEFAULT_SHAPE_DURATION, ObjectRef, Stage,
};
pub use timeline::build::BuiltTimeline;
pub use timeline::doc::{ObjectDoc, RenderDoc, StepDoc, TimelineDoc};
