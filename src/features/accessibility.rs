//! Accessibility descriptions for pin buttons
//!
//! A pin button is described by one of six phrases: pinned or unpinned,
//! crossed with the download phase of its progress.

use super::progress::{CheckableProgress, DownloadState};
use crate::i18n::{Key, Locale};

/// Pick the description key for a checked state and progress value
pub fn content_description(checked: bool, progress: i32) -> Key {
    phrase(checked, DownloadState::from_progress(progress))
}

fn phrase(checked: bool, download: DownloadState) -> Key {
    match (checked, download) {
        (true, DownloadState::NotDownloaded) => Key::PinnedNotDownloaded,
        (true, DownloadState::Downloading) => Key::PinnedDownloading,
        (true, DownloadState::Downloaded) => Key::PinnedDownloaded,
        (false, DownloadState::NotDownloaded) => Key::UnpinnedNotDownloaded,
        (false, DownloadState::Downloading) => Key::UnpinnedDownloading,
        (false, DownloadState::Downloaded) => Key::UnpinnedDownloaded,
    }
}

/// Localised description of a pin button's current state
pub fn describe(state: &CheckableProgress, locale: Locale) -> &'static str {
    locale.get(phrase(state.is_checked(), state.download_state()))
}
