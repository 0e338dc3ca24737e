//! Capture session orchestration.
//!
//! [`CaptureSession`] owns the mutable state one photobooth widget
//! instance carries — the camera lifecycle, the sticker board, the
//! active filter, the manual adjustments — and drives the composition
//! engine on capture. The camera is reached only through the injected
//! [`FrameSource`] abstraction, so the session is independent of any
//! particular capture backend or UI toolkit.
//!
//! - [`source`] — the frame-source seam plus a deterministic test
//!   pattern implementation.
//! - [`state`] — the `Idle`/`Active` camera state machine and session
//!   state.
//! - [`drag`] — single-active-drag pointer handling for stickers.
//! - [`pipeline`] — capture publication (upload + local cache),
//!   keyed to the originating capture.

pub mod drag;
pub mod pipeline;
pub mod source;
pub mod state;

pub use drag::{DragController, PointerKind};
pub use pipeline::publish;
pub use source::{FacingMode, FrameSource, TestPattern, VideoStream};
pub use state::{CameraState, CaptureSession, SessionState};

/// Errors from the capture session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The capture device could not be acquired (permission denied,
    /// no device, backend failure). The session stays idle.
    #[error("Camera unavailable: {reason}")]
    CameraUnavailable { reason: String },

    /// A frame or capture was requested while the camera was idle.
    #[error("Camera is not active")]
    CameraInactive,

    /// The active stream failed to produce a frame.
    #[error("Frame read failed: {reason}")]
    FrameRead { reason: String },

    /// Composition failed.
    #[error(transparent)]
    Compose(#[from] gradbooth_compose::ComposeError),

    /// Upload failed.
    #[error(transparent)]
    Upload(#[from] gradbooth_cloudinary::CloudinaryApiError),
}
