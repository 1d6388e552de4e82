//! # Transcript
//!
//! The message log for the current run: an ordered, append-only list of
//! entries, each tagged with who wrote it.
//!
//! The only mutation is [`MessageLog::push_exchange`], which appends a user
//! entry and its reply together. Nothing can remove or edit an entry, and a
//! user entry is always directly followed by exactly one bot entry.

/// Who authored an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Bot,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::User => "user",
            Origin::Bot => "bot",
        }
    }
}

/// A single line of conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub origin: Origin,
    pub text: String,
}

impl Entry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Bot,
            text: text.into(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    entries: Vec<Entry>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user entry followed by its reply.
    ///
    /// Returns references to the two new entries, in insertion order.
    pub fn push_exchange(&mut self, user: Entry, reply: Entry) -> (&Entry, &Entry) {
        debug_assert_eq!(user.origin, Origin::User);
        debug_assert_eq!(reply.origin, Origin::Bot);
        self.entries.push(user);
        self.entries.push(reply);
        let n = self.entries.len();
        (&self.entries[n - 2], &self.entries[n - 1])
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Number of user/bot exchanges recorded so far.
    pub fn exchange_count(&self) -> usize {
        self.entries.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn test_push_exchange_keeps_order() {
        let mut log = MessageLog::new();
        log.push_exchange(Entry::user("first"), Entry::bot("reply one"));
        log.push_exchange(Entry::user("second"), Entry::bot("reply two"));

        let texts: Vec<&str> = log.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["first", "reply one", "second", "reply two"]);
        assert_eq!(log.exchange_count(), 2);
    }

    #[test]
    fn test_user_entry_always_followed_by_bot() {
        let mut log = MessageLog::new();
        for i in 0..5 {
            log.push_exchange(Entry::user(format!("q{i}")), Entry::bot(format!("a{i}")));
        }
        for pair in log.entries().chunks(2) {
            assert_eq!(pair[0].origin, Origin::User);
            assert_eq!(pair[1].origin, Origin::Bot);
        }
    }

    #[test]
    fn test_push_exchange_returns_new_entries() {
        let mut log = MessageLog::new();
        let (user, bot) = log.push_exchange(Entry::user("Hi"), Entry::bot("Hello"));
        assert_eq!(user, &Entry::user("Hi"));
        assert_eq!(bot, &Entry::bot("Hello"));
    }

    #[test]
    fn test_origin_as_str() {
        assert_eq!(Origin::User.as_str(), "user");
        assert_eq!(Origin::Bot.as_str(), "bot");
    }
}
