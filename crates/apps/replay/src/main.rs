//! Headless replay driver.
//!
//! Runs the engine loop at a fixed 60 Hz without a renderer: fetches the
//! daily feed in the background, ingests it whenever it lands, and logs
//! the playback clock and visible-marker counts. Useful for exercising
//! the full pipeline from a terminal.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;
use tracing_subscriber::EnvFilter;

use foundation::time::format_clock_12h;
use runtime::frame::Frame;
use scene::lifecycle::PulsePolicy;
use scene::store::EventSample;
use view::camera::MarkerScaleDirection;
use view::engine::Engine;

const FRAME_DT_MS: f64 = 1000.0 / 60.0;
/// One full day replays in ~86 wall seconds at the default clock speed.
const TOTAL_FRAMES: u64 = 60 * 120;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| feed::USGS_ALL_DAY_URL.to_string());

    let mut engine = Engine::new(PulsePolicy::default(), MarkerScaleDirection::default());

    // Fire-and-forget: the loop starts with zero events and the feed joins
    // between frames whenever it completes.
    let mut pending: Option<JoinHandle<Vec<EventSample>>> =
        Some(tokio::spawn(async move { feed::fetch_events(&url).await }));

    let mut interval = tokio::time::interval(Duration::from_secs_f64(FRAME_DT_MS / 1000.0));
    let mut frame = Frame::new(0, FRAME_DT_MS);

    while frame.index < TOTAL_FRAMES {
        interval.tick().await;

        if let Some(handle) = pending.take() {
            if handle.is_finished() {
                let samples = handle.await.unwrap_or_default();
                let added = engine.ingest(samples);
                info!(added, "feed ingested");
            } else {
                pending = Some(handle);
            }
        }

        engine.advance(frame);

        if frame.index % 60 == 0 {
            info!(
                frame = frame.index,
                clock = %format_clock_12h(engine.clock().current_ms()),
                visible = engine.store().visible_count(),
                total = engine.store().len(),
                "tick"
            );
        }

        frame = frame.next();
    }

    info!(
        total = engine.store().len(),
        visible = engine.store().visible_count(),
        "replay finished"
    );
}
