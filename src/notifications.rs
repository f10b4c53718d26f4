//! Notification Channel
//!
//! A single-slot mailbox for the advisory shown after an operation resolves.
//! Showing a new advisory overwrites the previous one; nothing is queued.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::{SignedDuration, Timestamp};

/// Advisory severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Operation succeeded
    #[default]
    Success,

    /// Neutral information
    Info,

    /// Something needs attention
    Warning,

    /// Operation failed
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// The advisory slot.
///
/// Dismissing only clears `visible`; `message` and `severity` keep their last
/// values until the next [`Notifier::show`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advisory {
    /// Whether the advisory is on screen
    pub visible: bool,

    /// User-facing text
    pub message: String,

    /// Severity
    pub severity: Severity,

    /// When the advisory was last shown
    pub shown_at: Option<Timestamp>,
}

/// Single-slot, last-write-wins advisory holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifier {
    advisory: Advisory,
    auto_hide: Option<SignedDuration>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    /// How long an advisory stays visible before [`Notifier::dismiss_expired`]
    /// hides it.
    pub const DEFAULT_AUTO_HIDE: SignedDuration = SignedDuration::from_secs(3);

    /// Create an empty notifier with the default auto-hide delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            advisory: Advisory {
                visible: false,
                message: String::new(),
                severity: Severity::Success,
                shown_at: None,
            },
            auto_hide: Some(Self::DEFAULT_AUTO_HIDE),
        }
    }

    /// Replace the auto-hide delay; `None` keeps advisories up until dismissed.
    #[must_use]
    pub fn with_auto_hide(mut self, auto_hide: Option<SignedDuration>) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    /// Show an advisory now, replacing whatever was there.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.show_at(message, severity, Timestamp::now());
    }

    /// Show an advisory as of `now`, replacing whatever was there.
    pub fn show_at(&mut self, message: impl Into<String>, severity: Severity, now: Timestamp) {
        self.advisory = Advisory {
            visible: true,
            message: message.into(),
            severity,
            shown_at: Some(now),
        };
    }

    /// Show a success advisory.
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    /// Show an error advisory.
    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }

    /// Hide the advisory.
    pub fn dismiss(&mut self) {
        self.advisory.visible = false;
    }

    /// Hide the advisory if it has been visible for at least the auto-hide
    /// delay. Returns whether it was hidden.
    pub fn dismiss_expired(&mut self, now: Timestamp) -> bool {
        let (Some(auto_hide), Some(shown_at)) = (self.auto_hide, self.advisory.shown_at) else {
            return false;
        };

        if !self.advisory.visible || now.duration_since(shown_at) < auto_hide {
            return false;
        }

        self.dismiss();

        true
    }

    /// The advisory, if it is visible.
    pub fn current(&self) -> Option<&Advisory> {
        self.advisory.visible.then_some(&self.advisory)
    }

    /// The slot's contents, visible or not.
    pub fn advisory(&self) -> &Advisory {
        &self.advisory
    }
}
