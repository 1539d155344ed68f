//! User-visible notice banner state.
//!
//! DESIGN
//! ======
//! Guard denials and sign-in failures surface here rather than as raw errors.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    #[default]
    Info,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub message: Option<String>,
    pub level: NoticeLevel,
}

impl NoticeState {
    pub fn show(&mut self, message: impl Into<String>, level: NoticeLevel) {
        self.message = Some(message.into());
        self.level = level;
    }

    pub fn dismiss(&mut self) {
        self.message = None;
        self.level = NoticeLevel::Info;
    }
}
