#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Most notifications shown at once; older ones are dropped first.
pub const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationLevel {
    #[default]
    Info,
    Error,
}

/// A transient message shown by the toaster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Append a notification and return its id.
    pub fn push(&mut self, level: NotificationLevel, title: &str, message: &str) -> u64 {
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            level,
            title: title.to_owned(),
            message: message.to_owned(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    /// Returns `false` if the id was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
