use crate::{
    animation::state,
    foundation::error::ReelResult,
    foundation::ids::AnimationId,
    render::ops::Frame,
    resources::loader::ResourceLoader,
    scene::config::SceneConfig,
    scene::queue::AnimationQueue,
    scene::registry::ObjectRegistry,
    stage::arena::{AnimRef, Stage},
};

/// What one [`Scene::update`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct UpdateReport {
    /// Animation activated during this update.
    pub started: Option<AnimationId>,
    /// Animation that completed during this update.
    pub finished: Option<AnimationId>,
}

/// Plays queued animations one at a time, in enqueue order.
///
/// Top-level queue entries never overlap; wrap animations in a sync group to run
/// them in parallel. The scene holds only handles: every update and render borrows
/// the [`Stage`] that owns the objects and animations.
#[derive(Debug)]
pub struct Scene {
    config: SceneConfig,
    registry: ObjectRegistry,
    queue: AnimationQueue,
    current: Option<AnimRef>,
}

impl Scene {
    /// Scene with validated presentation settings.
    pub fn new(config: SceneConfig) -> ReelResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            registry: ObjectRegistry::new(),
            queue: AnimationQueue::new(),
            current: None,
        })
    }

    /// Presentation settings.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Objects drawn each frame, in draw order.
    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Animations waiting to start.
    pub fn queue(&self) -> &AnimationQueue {
        &self.queue
    }

    /// Animation currently playing.
    pub fn current(&self) -> Option<AnimRef> {
        self.current
    }

    /// Whether nothing is playing and nothing is queued.
    pub fn is_finished(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    /// Append `anim` to the playback queue.
    ///
    /// The same animation may be queued more than once; it restarts on every activation.
    pub fn play(&mut self, anim: AnimRef) {
        self.queue.push(anim);
    }

    /// Advance playback by `dt` seconds.
    ///
    /// With nothing playing, the head of the queue is reset and activated first. The
    /// current animation is then advanced once; when it completes the slot is cleared so
    /// the next queued animation starts on the following update.
    ///
    /// A head entry that does not belong to `stage` is an error and stays queued.
    pub fn update(&mut self, stage: &mut Stage, dt: f64) -> ReelResult<UpdateReport> {
        state::check_delta(dt)?;

        let mut report = UpdateReport::default();

        if self.current.is_none() {
            if let Some(head) = self.queue.get(0) {
                // Composite children are checked against the stage when built.
                stage.try_animation(head)?;
            }
            if let Some(next) = self.queue.pop_front() {
                state::reset(stage, next)?;
                state::activate(stage, next, &mut self.registry)?;
                let started = stage.try_animation(next)?;
                tracing::info!(
                    animation = %next.id(),
                    kind = started.kind().name(),
                    ease = started.ease().map_or("none", |e| e.name()),
                    "started animation"
                );
                report.started = Some(next.id());
                self.current = Some(next);
            }
        }

        if let Some(current) = self.current {
            if state::advance(stage, current, dt)? {
                tracing::info!(animation = %current.id(), "finished animation");
                report.finished = Some(current.id());
                self.current = None;
            }
        }

        Ok(report)
    }

    /// Collect draw commands for every registered object, in registration order.
    pub fn render(&self, stage: &Stage) -> ReelResult<Frame> {
        let mut frame = Frame::new(self.config.background);
        for object in self.registry.iter() {
            stage.try_object(object)?.draw(&mut frame.ops);
        }
        Ok(frame)
    }

    /// End of playback: release queue and registry storage and unload resources.
    ///
    /// Objects and animations stay with their [`Stage`].
    pub fn teardown(mut self, loader: &mut dyn ResourceLoader) {
        tracing::debug!(
            registered = self.registry.len(),
            pending = self.queue.len(),
            "tearing down scene"
        );
        self.registry.clear();
        self.queue.clear();
        self.current = None;
        loader.unload_all();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/scheduler.rs"]
mod tests;
