// src/preferences.rs
use gloo::storage::{LocalStorage, Storage};

const SWIPE_HINT_KEY: &str = "tandem-viewer.swipe-hint-seen";

/// Whether the "swipe down to close" hint has been shown before.
/// Unavailable storage counts as not seen.
pub fn swipe_hint_seen() -> bool {
    LocalStorage::get::<bool>(SWIPE_HINT_KEY).unwrap_or(false)
}

pub fn mark_swipe_hint_seen() {
    if let Err(e) = LocalStorage::set(SWIPE_HINT_KEY, true) {
        log::warn!("Could not persist swipe hint flag: {:?}", e);
    }
}
