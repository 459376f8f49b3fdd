//! Transient notification boundary
//!
//! Pickups, hazard hits, level transitions and terminal outcomes surface
//! through this sink. Purely advisory: the simulation never waits on or
//! reads back from it.

use serde::{Deserialize, Serialize};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Consumer of transient feedback messages
pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, message: &str);
}

/// Routes notifications to the log at matching levels
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Info | NoticeKind::Success => log::info!("{message}"),
            NoticeKind::Warning => log::warn!("{message}"),
            NoticeKind::Error => log::error!("{message}"),
        }
    }
}

/// Test double that remembers everything it was told
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<(NoticeKind, String)>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.messages.push((kind, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_order() {
        let mut sink = RecordingNotifier::default();
        sink.notify(NoticeKind::Success, "first");
        sink.notify(NoticeKind::Warning, "second");
        assert_eq!(sink.messages.len(), 2);
        assert_eq!(sink.messages[0], (NoticeKind::Success, "first".into()));
        assert_eq!(sink.messages[1], (NoticeKind::Warning, "second".into()));
    }
}
