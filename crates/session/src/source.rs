//! The camera seam.
//!
//! The session never talks to capture hardware directly; it acquires a
//! [`VideoStream`] from an injected [`FrameSource`]. Production
//! embedders implement these traits over their platform's media
//! facility; tests and demos use the deterministic [`TestPattern`].

use async_trait::async_trait;
use image::RgbaImage;

use crate::SessionError;

/// Which camera to acquire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    /// Front ("selfie") camera.
    #[default]
    User,
    /// Rear camera.
    Environment,
}

impl FacingMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::User => Self::Environment,
            Self::Environment => Self::User,
        }
    }
}

/// A live capture stream.
///
/// `stop` releases the underlying device; the session guarantees it is
/// called before another stream is acquired and whenever the session
/// goes idle, so the hardware is never left locked.
pub trait VideoStream: Send {
    /// Read the current frame as straight-alpha RGBA.
    fn frame(&mut self) -> Result<RgbaImage, SessionError>;

    /// Release the underlying device.
    fn stop(&mut self);
}

/// Acquires capture streams for a facing mode.
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn acquire(&self, facing: FacingMode) -> Result<Box<dyn VideoStream>, SessionError>;
}

/// Deterministic synthetic camera.
///
/// Produces a fixed gradient frame (tinted by facing mode so camera
/// switches are observable) on every read. Used by tests and demos.
#[derive(Debug, Clone)]
pub struct TestPattern {
    width: u32,
    height: u32,
}

impl TestPattern {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[async_trait]
impl FrameSource for TestPattern {
    async fn acquire(&self, facing: FacingMode) -> Result<Box<dyn VideoStream>, SessionError> {
        Ok(Box::new(TestPatternStream {
            width: self.width,
            height: self.height,
            facing,
        }))
    }
}

struct TestPatternStream {
    width: u32,
    height: u32,
    facing: FacingMode,
}

impl VideoStream for TestPatternStream {
    fn frame(&mut self) -> Result<RgbaImage, SessionError> {
        let tint = match self.facing {
            FacingMode::User => 200,
            FacingMode::Environment => 60,
        };
        Ok(RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba([
                (x % 256) as u8,
                (y % 256) as u8,
                tint,
                255,
            ])
        }))
    }

    fn stop(&mut self) {}
}
