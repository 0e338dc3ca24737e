//! The capture session state machine.
//!
//! Camera lifecycle: `Idle -> Active` on start, `Active -> Idle` on
//! stop, `Active -> Active` on a facing-mode switch (the old stream is
//! torn down before the new one is acquired). Starting while already
//! active also releases the existing stream first — capture handles
//! are never leaked. An acquire failure surfaces an error and leaves
//! the session idle.

use gradbooth_compose::{Adjustments, CompositionEngine};
use gradbooth_core::{resolve, CapturedImage, StickerBoard, Viewport};

use crate::source::{FacingMode, FrameSource, VideoStream};
use crate::SessionError;

/// Camera side of the session, as an explicit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraState {
    Idle,
    Active { facing: FacingMode },
}

/// The mutable state one widget instance owns: the ordered sticker
/// board, the active filter id, and the manual adjustments.
///
/// All mutations are synchronous and immediately visible to the next
/// composition pass; there is no batching.
#[derive(Debug)]
pub struct SessionState {
    pub stickers: StickerBoard,
    filter_id: String,
    pub adjustments: Adjustments,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            stickers: StickerBoard::new(),
            filter_id: "none".into(),
            adjustments: Adjustments::default(),
        }
    }

    /// The active filter id. Unknown ids are tolerated and resolve to
    /// the identity filter at composition time.
    pub fn filter_id(&self) -> &str {
        &self.filter_id
    }

    pub fn set_filter(&mut self, id: &str) {
        self.filter_id = id.to_owned();
    }
}

struct ActiveStream {
    facing: FacingMode,
    stream: Box<dyn VideoStream>,
}

/// Orchestrates the camera lifecycle and owns the state the
/// composition engine consumes on each capture request.
pub struct CaptureSession<S: FrameSource> {
    source: S,
    viewport: Viewport,
    engine: CompositionEngine,
    state: SessionState,
    active: Option<ActiveStream>,
}

impl<S: FrameSource> CaptureSession<S> {
    pub fn new(source: S, viewport: Viewport) -> Self {
        Self::with_engine(source, viewport, CompositionEngine::new())
    }

    pub fn with_engine(source: S, viewport: Viewport, engine: CompositionEngine) -> Self {
        Self {
            source,
            viewport,
            engine,
            state: SessionState::new(),
            active: None,
        }
    }

    pub fn camera_state(&self) -> CameraState {
        match &self.active {
            Some(active) => CameraState::Active {
                facing: active.facing,
            },
            None => CameraState::Idle,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// Start (or restart) the camera with the given facing mode.
    ///
    /// An existing stream is released before the new one is acquired.
    /// On failure the error is surfaced and the session stays idle.
    pub async fn start(&mut self, facing: FacingMode) -> Result<(), SessionError> {
        self.release();
        let stream = self.source.acquire(facing).await?;
        tracing::info!(?facing, "capture stream acquired");
        self.active = Some(ActiveStream { facing, stream });
        Ok(())
    }

    /// Switch between front and rear camera, tearing the current
    /// stream down and reacquiring. When idle, starts the camera
    /// opposite the default.
    pub async fn switch_facing(&mut self) -> Result<(), SessionError> {
        let current = match self.camera_state() {
            CameraState::Active { facing } => facing,
            CameraState::Idle => FacingMode::default(),
        };
        self.start(current.toggled()).await
    }

    /// Stop the camera and release the capture stream.
    pub fn stop(&mut self) {
        self.release();
    }

    /// Begin a new photo: clears the sticker board. Sticker lifetime
    /// is bounded by one capture session.
    pub fn new_photo(&mut self) {
        self.state.stickers.clear();
    }

    /// Flatten the current frame, filter, and stickers into a
    /// [`CapturedImage`].
    pub fn capture(&mut self) -> Result<CapturedImage, SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::CameraInactive)?;
        let frame = active.stream.frame()?;

        let png = self.engine.compose(
            &frame,
            resolve(self.state.filter_id()),
            &self.state.adjustments,
            self.state.stickers.placements(),
            self.viewport,
        )?;

        Ok(CapturedImage::new(png, chrono::Utc::now()))
    }

    fn release(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.stream.stop();
            tracing::info!(facing = ?active.facing, "capture stream released");
        }
    }
}

impl<S: FrameSource> Drop for CaptureSession<S> {
    fn drop(&mut self) {
        self.release();
    }
}
