//! Application messages

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Slider moved to a new progress value
    ProgressChanged(i32),
    /// A pin button asked to change its checked state
    PinCheckedChanged(usize, bool),
    /// Save every widget's state, rebuild the widgets and restore them
    RecreateWidgets,
    /// Dark mode switched on or off
    DarkModeToggled(bool),
}
