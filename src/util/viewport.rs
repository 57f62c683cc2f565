//! Live viewport measurements.

/// Current viewport width in CSS pixels.
///
/// Reads `window.innerWidth` on every call — drag clamp bounds must track
/// live browser resizes rather than a cached measurement. Returns zero
/// outside a browser.
#[must_use]
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
