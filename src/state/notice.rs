//! User-visible notices (toast banner) for request outcomes.
//!
//! DESIGN
//! ======
//! Failures that are not handled by session teardown land here instead of
//! only in the console. The list is capped and drops repeats of the newest
//! message so a burst of identical failures shows one notice.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Maximum notices kept on screen.
pub const MAX_NOTICES: usize = 4;

/// How long a notice stays up before it dismisses itself.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Severity, used for styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "notice--info",
            Self::Success => "notice--success",
            Self::Error => "notice--error",
        }
    }
}

/// One banner entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Notice stack, newest last.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Add a notice and return its id. Repeating the newest message returns
    /// the existing id instead of stacking a duplicate.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let message = message.into();
        if let Some(last) = self.items.last()
            && last.level == level
            && last.message == message
        {
            return last.id;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, level, message });
        if self.items.len() > MAX_NOTICES {
            let excess = self.items.len() - MAX_NOTICES;
            self.items.drain(..excess);
        }
        id
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
