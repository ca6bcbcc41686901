//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "固定进度");

    // Demo controls
    m.insert(Key::ProgressLabel, "进度");
    m.insert(Key::RecreateButton, "重建控件");
    m.insert(Key::DarkModeToggle, "深色模式");

    // Pin button descriptions
    m.insert(Key::PinnedNotDownloaded, "已固定，未下载");
    m.insert(Key::PinnedDownloading, "已固定，正在下载");
    m.insert(Key::PinnedDownloaded, "已固定，已下载");
    m.insert(Key::UnpinnedNotDownloaded, "未固定，未下载");
    m.insert(Key::UnpinnedDownloading, "未固定，正在下载");
    m.insert(Key::UnpinnedDownloaded, "未固定，已下载");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
