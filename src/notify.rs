//! User-visible notices emitted by the controller.
//!
//! The crate never renders toasts; it pushes [`Notice`] values onto a
//! channel and the presentation layer decides how to show them.

use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sender half handed to the controller.
pub type NoticeSender = mpsc::UnboundedSender<Notice>;

/// Receiver half consumed by the presentation layer.
pub type NoticeReceiver = mpsc::UnboundedReceiver<Notice>;

/// Create a notice channel pair.
pub fn notice_channel() -> (NoticeSender, NoticeReceiver) {
    mpsc::unbounded_channel()
}
