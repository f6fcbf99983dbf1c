use crate::{
    foundation::core::Rgba8,
    foundation::error::{ReelError, ReelResult},
    render::ops::{DrawOp, Frame},
};

/// Drawing surface the scene hands its frames to.
///
/// The scene never touches pixels: it only produces [`Frame`]s. Implementations wrap
/// whatever windowing or rasterization library the application uses.
pub trait RenderBackend {
    /// Establish the draw context for a frame and clear it.
    fn begin_frame(&mut self, background: Rgba8) -> ReelResult<()>;

    /// Draw a single command.
    fn draw(&mut self, op: &DrawOp) -> ReelResult<()>;

    /// Present the frame.
    fn end_frame(&mut self) -> ReelResult<()>;
}

/// Drive a backend through one frame.
pub fn execute_frame<B: RenderBackend + ?Sized>(backend: &mut B, frame: &Frame) -> ReelResult<()> {
    backend.begin_frame(frame.background)?;
    for op in &frame.ops {
        backend.draw(op)?;
    }
    backend.end_frame()
}

/// Backend that keeps frames in memory instead of drawing them.
///
/// Used for headless runs and tests. By default only the most recent frame is kept.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    keep_all: bool,
    frames: Vec<Frame>,
    open: Option<Frame>,
    frame_count: u64,
}

impl RecordingBackend {
    /// Recorder keeping only the last completed frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder keeping every completed frame.
    pub fn keep_all() -> Self {
        Self {
            keep_all: true,
            ..Self::default()
        }
    }

    /// Completed frames still held (one at most unless [`Self::keep_all`] was used).
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Most recent completed frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of frames completed since creation.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl RenderBackend for RecordingBackend {
    fn begin_frame(&mut self, background: Rgba8) -> ReelResult<()> {
        if self.open.is_some() {
            return Err(ReelError::playback("begin_frame called inside an open frame"));
        }
        self.open = Some(Frame::new(background));
        Ok(())
    }

    fn draw(&mut self, op: &DrawOp) -> ReelResult<()> {
        let frame = self
            .open
            .as_mut()
            .ok_or_else(|| ReelError::playback("draw called outside of a frame"))?;
        frame.ops.push(op.clone());
        Ok(())
    }

    fn end_frame(&mut self) -> ReelResult<()> {
        let frame = self
            .open
            .take()
            .ok_or_else(|| ReelError::playback("end_frame called without begin_frame"))?;
        if !self.keep_all {
            self.frames.clear();
        }
        self.frames.push(frame);
        self.frame_count += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
