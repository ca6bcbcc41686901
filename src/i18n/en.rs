//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Pin Progress");

    // Demo controls
    m.insert(Key::ProgressLabel, "Progress");
    m.insert(Key::RecreateButton, "Recreate widgets");
    m.insert(Key::DarkModeToggle, "Dark mode");

    // Pin button descriptions
    m.insert(Key::PinnedNotDownloaded, "Pinned, not downloaded");
    m.insert(Key::PinnedDownloading, "Pinned, downloading");
    m.insert(Key::PinnedDownloaded, "Pinned, downloaded");
    m.insert(Key::UnpinnedNotDownloaded, "Unpinned, not downloaded");
    m.insert(Key::UnpinnedDownloading, "Unpinned, downloading");
    m.insert(Key::UnpinnedDownloaded, "Unpinned, downloaded");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
