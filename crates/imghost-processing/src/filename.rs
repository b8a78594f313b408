//! Stored filename generation.
//!
//! Names look like `image_<unix_seconds>_<8 digit random><original extension>`.
//! Uniqueness is probabilistic: two uploads collide only with the same second
//! and the same random draw.

use chrono::Utc;
use imghost_core::constants::{FILENAME_PREFIX, FILENAME_RANDOM_UPPER};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};

static SEED_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Extension of the final path component, including the dot.
///
/// Both `/` and `\` separate components. Returns an empty string when the
/// name has no dot.
pub fn original_extension(filename: &str) -> &str {
    let base = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);
    match base.rfind('.') {
        Some(idx) => &base[idx..],
        None => "",
    }
}

/// Generate a fresh stored filename for an upload named `original_filename`.
pub fn generate_filename(original_filename: &str) -> String {
    let now = Utc::now();
    let nanos = now.timestamp_nanos_opt().unwrap_or_default() as u64;
    let sequence = SEED_SEQUENCE.fetch_add(1, Ordering::Relaxed);

    // Seeded per call; the sequence keeps calls within one clock tick apart.
    let mut rng = StdRng::seed_from_u64(nanos ^ sequence.rotate_left(32));
    let random = rng.random_range(0..FILENAME_RANDOM_UPPER);

    format_filename(now.timestamp(), random, original_extension(original_filename))
}

pub fn format_filename(timestamp: i64, random: u32, extension: &str) -> String {
    format!("{}_{}_{:08}{}", FILENAME_PREFIX, timestamp, random, extension)
}
