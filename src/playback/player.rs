use crate::{
    foundation::error::ReelResult,
    playback::clock::Clock,
    render::backend::{RenderBackend, execute_frame},
    scene::scheduler::Scene,
    stage::arena::Stage,
};

/// Playback loop options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerOptions {
    /// Leave the loop once the scene has nothing left to play.
    pub stop_when_finished: bool,
    /// Hard cap on rendered frames.
    pub max_frames: Option<u64>,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            stop_when_finished: true,
            max_frames: None,
        }
    }
}

/// Summary of a playback run.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct PlaybackStats {
    /// Frames updated and rendered.
    pub frames: u64,
    /// Sum of the deltas fed to the scene.
    pub simulated_secs: f64,
    /// Animations activated.
    pub started: u32,
    /// Animations completed.
    pub completed: u32,
    /// Whether the scene ran out of animations.
    pub finished: bool,
}

/// Frame loop: per frame, take a delta from the clock, update the scene, render it.
#[derive(Clone, Debug, Default)]
pub struct Player {
    opts: PlayerOptions,
}

impl Player {
    /// Player with the given options.
    pub fn new(opts: PlayerOptions) -> Self {
        Self { opts }
    }

    /// Loop options.
    pub fn options(&self) -> &PlayerOptions {
        &self.opts
    }

    /// Run until the clock signals stop, the frame cap is hit, or (when configured)
    /// the scene finishes. `update` always precedes `render` within a frame.
    #[tracing::instrument(skip_all, fields(title = %scene.config().title))]
    pub fn run<C, B>(
        &self,
        scene: &mut Scene,
        stage: &mut Stage,
        clock: &mut C,
        backend: &mut B,
    ) -> ReelResult<PlaybackStats>
    where
        C: Clock + ?Sized,
        B: RenderBackend + ?Sized,
    {
        let mut stats = PlaybackStats::default();

        while !clock.should_stop() {
            if self.opts.stop_when_finished && scene.is_finished() {
                break;
            }
            if self.opts.max_frames.is_some_and(|max| stats.frames >= max) {
                break;
            }

            let dt = clock.tick();
            let report = scene.update(stage, dt)?;
            let frame = scene.render(stage)?;
            execute_frame(backend, &frame)?;

            stats.frames += 1;
            stats.simulated_secs += dt;
            stats.started += u32::from(report.started.is_some());
            stats.completed += u32::from(report.finished.is_some());
        }

        stats.finished = scene.is_finished();
        tracing::info!(
            frames = stats.frames,
            simulated_secs = stats.simulated_secs,
            finished = stats.finished,
            "playback stopped"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
