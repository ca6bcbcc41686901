//! Progress state shared by the circle and pin widgets
//!
//! Holds the two persisted integers (`progress` and `max`) and the derived
//! values every paint pass needs. Setters never validate: the stored values
//! are exactly what the host asked for, and the derivations decide how to
//! render out-of-range input.
//!
//! Every mutation bumps a revision counter. The widget adapters compare the
//! revision they last painted with the current one and clear their canvas
//! cache on mismatch, so one setter call is one repaint request.

/// Default `max` for newly constructed widgets
pub const DEFAULT_MAX: i32 = 100;

/// Degrees in a full turn
const FULL_TURN: i64 = 360;

/// Progress and maximum of a single widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    progress: i32,
    max: i32,
    revision: u64,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new(0, DEFAULT_MAX)
    }
}

impl ProgressState {
    pub fn new(progress: i32, max: i32) -> Self {
        Self {
            progress,
            max,
            revision: 0,
        }
    }

    /// Returns the maximum progress value.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Sets the maximum progress value. Defaults to 100.
    pub fn set_max(&mut self, max: i32) {
        self.max = max;
        self.invalidate();
    }

    /// Returns the current progress, nominally between 0 and `max`.
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Sets the current progress. Values outside `0..=max` are stored as-is.
    pub fn set_progress(&mut self, progress: i32) {
        self.progress = progress;
        self.invalidate();
    }

    /// Overwrite both fields from a restored snapshot
    pub fn restore(&mut self, progress: i32, max: i32) {
        self.progress = progress;
        self.max = max;
        self.invalidate();
    }

    /// Number of repaint requests issued so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Rendered fraction in `[0, 1]`; zero when `max` is not positive
    pub fn fraction(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.progress as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    /// Sweep angle in whole degrees: `360 * progress / max`, truncated.
    ///
    /// Not clamped; progress above `max` sweeps past a full turn and negative
    /// progress sweeps backwards. A non-positive `max` renders no progress.
    pub fn sweep_degrees(&self) -> i32 {
        if self.max <= 0 {
            return 0;
        }
        let sweep = FULL_TURN * i64::from(self.progress) / i64::from(self.max);
        sweep.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Label drawn in the middle of the circle, e.g. `"42%"`
    pub fn label(&self) -> String {
        format!("{}%", self.progress)
    }

    fn invalidate(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(
            progress = self.progress,
            max = self.max,
            revision = self.revision,
            "progress invalidated"
        );
    }
}

/// Which of the three download phases a progress value falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    /// `progress <= 0`
    NotDownloaded,
    /// `0 < progress < 100`
    Downloading,
    /// `progress >= 100`
    Downloaded,
}

impl DownloadState {
    pub fn from_progress(progress: i32) -> Self {
        if progress <= 0 {
            Self::NotDownloaded
        } else if progress >= 100 {
            Self::Downloaded
        } else {
            Self::Downloading
        }
    }
}

/// Progress plus the pinned/unpinned toggle of a pin button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckableProgress {
    pub progress: ProgressState,
    checked: bool,
}

impl CheckableProgress {
    pub fn new(progress: ProgressState, checked: bool) -> Self {
        Self { progress, checked }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state, returning whether it changed.
    ///
    /// Only an actual change requests a repaint.
    pub fn set_checked(&mut self, checked: bool) -> bool {
        if self.checked == checked {
            return false;
        }
        self.checked = checked;
        // Shares the progress revision so a single cache covers both.
        self.progress.invalidate();
        true
    }

    /// Flip the checked state and return the new value
    pub fn toggle(&mut self) -> bool {
        let next = !self.checked;
        self.set_checked(next);
        next
    }

    pub fn download_state(&self) -> DownloadState {
        DownloadState::from_progress(self.progress.progress())
    }

    pub fn revision(&self) -> u64 {
        self.progress.revision()
    }
}
