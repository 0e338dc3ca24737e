//! Headless booth walkthrough over the synthetic camera.
//!
//! Starts a session on the test pattern, decorates it, captures, and
//! writes the flattened PNG next to the working directory. Run with
//! `cargo run -p gradbooth-session --example booth_demo`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gradbooth_core::{BoothConfig, Viewport};
use gradbooth_gallery::LocalCache;
use gradbooth_session::{CaptureSession, FacingMode, TestPattern};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gradbooth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BoothConfig::from_env();
    let cache = LocalCache::from_config(&config);

    let viewport = Viewport::new(480.0, 360.0);
    let mut session = CaptureSession::new(TestPattern::new(640, 480), viewport);
    session.start(FacingMode::User).await?;

    session.state_mut().set_filter("clarendon");
    let cap = session.state_mut().stickers.place("🎓", viewport);
    session.state_mut().stickers.rotate(cap);
    session.state_mut().stickers.place("🎉", viewport);

    let captured = session.capture()?;
    let filename = captured.suggested_filename();
    std::fs::write(&filename, &captured.png)?;
    tracing::info!(%filename, bytes = captured.png.len(), "capture written");

    // Cached photos would seed the gallery's last fallback rung.
    let cached = cache.load().await;
    tracing::info!(cached = cached.len(), "local cache entries");

    session.stop();
    Ok(())
}
