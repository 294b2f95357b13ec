//! Toast notifications raised by forms and fetches.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "toast--success",
            NoticeKind::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    /// Translation key of the headline.
    pub message_key: &'static str,
    /// Untranslated detail (error text) shown under the headline.
    pub detail: Option<String>,
}

impl Notice {
    pub fn success(message_key: &'static str) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NoticeKind::Success,
            message_key,
            detail: None,
        }
    }

    pub fn error(message_key: &'static str, detail: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NoticeKind::Error,
            message_key,
            detail: Some(detail.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Bounded queue of visible toasts; the oldest drops off first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeQueue {
    items: Vec<Notice>,
    capacity: usize,
}

impl NoticeQueue {
    pub const DISPLAY_MS: u32 = 5000;

    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, notice: Notice) -> Uuid {
        let id = notice.id;
        self.items.push(notice);
        if self.items.len() > self.capacity {
            let overflow = self.items.len() - self.capacity;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|notice| notice.id != id);
        before != self.items.len()
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_notice_is_evicted() {
        let mut queue = NoticeQueue::new(2);
        let first = queue.push(Notice::success("a"));
        queue.push(Notice::success("b"));
        queue.push(Notice::error("c", "boom"));
        assert_eq!(queue.items().len(), 2);
        assert!(!queue.dismiss(first));
        assert_eq!(queue.items()[1].message_key, "c");
    }
}
