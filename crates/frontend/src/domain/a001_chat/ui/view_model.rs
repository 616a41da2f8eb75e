//! Chat Panel - View Model

use chrono::Utc;
use contracts::domain::a001_chat::conversation::{Conversation, PendingReply};
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub conversation: RwSignal<Conversation>,
    pub input: RwSignal<String>,
}

impl ChatVm {
    pub fn new(greeting: &str) -> Self {
        Self {
            conversation: RwSignal::new(Conversation::new(greeting, Utc::now())),
            input: RwSignal::new(String::new()),
        }
    }

    /// Send the current input. Clears the input and returns a reply ticket
    /// when something was sent.
    pub fn submit(&self) -> Option<PendingReply> {
        let text = self.input.get_untracked();
        let ticket = self
            .conversation
            .try_update(|conv| conv.send(&text, Utc::now()))
            .flatten();
        if ticket.is_some() {
            self.input.set(String::new());
        }
        ticket
    }

    /// Redeem a reply ticket. `false` when the conversation was ended or the
    /// view is already gone.
    pub fn deliver(&self, ticket: PendingReply, text: &str) -> bool {
        self.conversation
            .try_update(|conv| conv.deliver_reply(ticket, text, Utc::now()).is_some())
            .unwrap_or(false)
    }

    /// "End Chat": back to the greeting, pending replies dropped
    pub fn end(&self, greeting: &str) {
        self.conversation.update(|conv| conv.end(greeting, Utc::now()));
    }
}

/// Set while the chat view is mounted. Timer tasks check it before touching
/// reactive state so a late reply never writes into a torn-down view.
#[derive(Clone, Debug)]
pub struct ViewLifetime(Arc<AtomicBool>);

impl ViewLifetime {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_chat::aggregate::Sender;

    const GREETING: &str = "Hello! How can I assist you today?";
    const REPLY: &str = "I'm a simple bot. I don't have real responses yet, but I'm here to help!";

    #[test]
    fn test_submit_clears_input_and_appends() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ChatVm::new(GREETING);
            vm.input.set("hi".to_string());

            let ticket = vm.submit().expect("ticket for non-blank input");
            assert_eq!(vm.input.get_untracked(), "");
            assert_eq!(vm.conversation.with_untracked(|c| c.len()), 2);

            assert!(vm.deliver(ticket, REPLY));
            vm.conversation.with_untracked(|c| {
                assert_eq!(c.len(), 3);
                assert_eq!(c.last().map(|m| m.sender), Some(Sender::Bot));
                assert_eq!(c.last().map(|m| m.text.as_str()), Some(REPLY));
            });
        });
    }

    #[test]
    fn test_blank_submit_keeps_input() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ChatVm::new(GREETING);
            vm.input.set("   ".to_string());
            assert!(vm.submit().is_none());
            assert_eq!(vm.input.get_untracked(), "   ");
            assert_eq!(vm.conversation.with_untracked(|c| c.len()), 1);
        });
    }

    #[test]
    fn test_end_drops_pending_reply() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ChatVm::new(GREETING);
            vm.input.set("hi".to_string());
            let ticket = vm.submit().unwrap();
            vm.end(GREETING);
            assert!(!vm.deliver(ticket, REPLY));
            assert_eq!(vm.conversation.with_untracked(|c| c.len()), 1);
        });
    }

    #[test]
    fn test_view_lifetime() {
        let lifetime = ViewLifetime::new();
        let task_copy = lifetime.clone();
        assert!(task_copy.is_alive());
        lifetime.end();
        assert!(!task_copy.is_alive());
    }
}
