//! Configuration constants for the rental marketplace core.
//!
//! This module centralizes magic numbers and configuration values
//! to improve maintainability and enable easier tuning.

/// Required length of a one-time verification code.
pub const OTP_CODE_LEN: usize = 6;

/// Simulated round-trip latency for auth gateway calls, in milliseconds.
pub const AUTH_ROUND_TRIP_MS: u64 = 1500;

/// Simulated latency for resolving the current location, in milliseconds.
pub const LOCATION_LOOKUP_MS: u64 = 1500;

/// Simulated latency for publishing a new listing, in milliseconds.
pub const LISTING_SUBMIT_MS: u64 = 1000;

/// Number of products shown per catalog section before expansion.
pub const SECTION_PREVIEW_LIMIT: usize = 6;

/// Maximum number of image references on a listing draft.
pub const MAX_LISTING_IMAGES: usize = 5;

/// Minimum length of a listing title.
pub const MIN_TITLE_LEN: usize = 2;

/// Minimum length of a listing description.
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Minimum length of a listing location string.
pub const MIN_LOCATION_LEN: usize = 5;

/// Upper bound of the product rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Location shown before the user has picked or resolved one.
pub const DEFAULT_LOCATION: &str = "New York, NY";

/// Address returned by the simulated location resolver.
pub const RESOLVED_MOCK_ADDRESS: &str = "123 Main St, New York, NY 10001";

/// Section key for the trending section in a catalog view.
pub const SECTION_KEY_TRENDING: &str = "trending";

/// Section key for the newly-added section in a catalog view.
pub const SECTION_KEY_NEW: &str = "new";

/// Return the current Unix timestamp in seconds.
///
/// This is a convenience wrapper that avoids the boilerplate of
/// `SystemTimeProvider::new().now_unix()` in production code paths.
/// For testable code, prefer accepting a `TimeProvider` parameter instead.
pub fn now_unix() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
