#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8000"  // API gateway when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

/// Viewports at least this wide get the auto-advancing feature carousel.
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Time each feature stays active before the carousel moves on.
pub const ADVANCE_INTERVAL_MS: u32 = 4_000;

/// Progress bar refresh rate.
pub const TICK_MS: u32 = 50;

/// Delay between fading the feature image out and swapping its source.
pub const IMAGE_SWAP_DELAY_MS: u32 = 200;

/// Gap kept above a section when scrolling it into view.
pub const SCROLL_OFFSET_PX: f64 = 100.0;
