//! Chat transcript with a scripted bot.
//!
//! A send appends the user's line right away and hands back a [`PendingReply`]
//! ticket. Whoever runs the timer redeems the ticket later to append the bot
//! line. Ending the conversation moves it to a new session, which turns every
//! ticket issued before that point into a no-op.

use super::aggregate::{ChatMessage, ChatMessageId};
use chrono::{DateTime, Utc};

/// Ticket for one scheduled bot reply. Not `Clone`: it is redeemed at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending reply does nothing unless it is delivered"]
pub struct PendingReply {
    session: u64,
}

impl PendingReply {
    pub fn session(&self) -> u64 {
        self.session
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    session: u64,
    outstanding: usize,
}

impl Conversation {
    /// Fresh transcript holding only the bot greeting
    pub fn new(greeting: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage::bot(ChatMessageId::new(1), greeting, now)],
            session: 0,
            outstanding: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of replies scheduled in the current session and not yet delivered
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    fn next_id(&self) -> ChatMessageId {
        ChatMessageId::new(self.messages.len() as u32 + 1)
    }

    /// Append a user message. Blank input is ignored and yields no ticket.
    ///
    /// The stored text is the input as typed; only the emptiness check trims.
    pub fn send(&mut self, input: &str, now: DateTime<Utc>) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }
        let message = ChatMessage::user(self.next_id(), input, now);
        self.messages.push(message);
        self.outstanding += 1;
        Some(PendingReply {
            session: self.session,
        })
    }

    /// Redeem a ticket. Returns the appended bot message, or `None` when the
    /// ticket belongs to an ended session.
    pub fn deliver_reply(
        &mut self,
        ticket: PendingReply,
        text: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Option<&ChatMessage> {
        if ticket.session != self.session || self.outstanding == 0 {
            return None;
        }
        self.outstanding -= 1;
        let message = ChatMessage::bot(self.next_id(), text, now);
        self.messages.push(message);
        self.messages.last()
    }

    /// Start over with a new greeting; every ticket issued so far goes stale.
    pub fn end(&mut self, greeting: impl Into<String>, now: DateTime<Utc>) {
        self.session += 1;
        self.outstanding = 0;
        self.messages = vec![ChatMessage::bot(ChatMessageId::new(1), greeting, now)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_chat::aggregate::Sender;
    use chrono::{Duration, TimeZone};

    const GREETING: &str = "Hello! How can I assist you today?";
    const REPLY: &str = "I'm a simple bot. I don't have real responses yet, but I'm here to help!";

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 0).unwrap()
    }

    #[test]
    fn test_starts_with_single_greeting() {
        let conv = Conversation::new(GREETING, t0());
        assert_eq!(conv.len(), 1);
        let first = &conv.messages()[0];
        assert_eq!(first.id, ChatMessageId::new(1));
        assert_eq!(first.sender, Sender::Bot);
        assert_eq!(first.text, GREETING);
        assert_eq!(conv.outstanding(), 0);
    }

    #[test]
    fn test_send_hi_then_reply() {
        let mut conv = Conversation::new(GREETING, t0());

        let ticket = conv.send("hi", t0()).expect("non-blank input is accepted");
        assert_eq!(conv.len(), 2);
        assert_eq!(conv.messages()[1].sender, Sender::User);
        assert_eq!(conv.messages()[1].text, "hi");
        assert_eq!(conv.messages()[1].id, ChatMessageId::new(2));

        let later = t0() + Duration::milliseconds(1000);
        let reply = conv.deliver_reply(ticket, REPLY, later).cloned();
        let reply = reply.expect("reply is delivered in the same session");
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(reply.text, REPLY);
        assert_eq!(reply.id, ChatMessageId::new(3));
        assert_eq!(reply.timestamp, later);
        assert_eq!(conv.len(), 3);
        assert_eq!(conv.outstanding(), 0);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut conv = Conversation::new(GREETING, t0());
        for input in ["", " ", "\t", "  \n  "] {
            assert!(conv.send(input, t0()).is_none());
        }
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.outstanding(), 0);
    }

    #[test]
    fn test_text_kept_as_typed() {
        let mut conv = Conversation::new(GREETING, t0());
        let _ = conv.send("  padded  ", t0());
        assert_eq!(conv.messages()[1].text, "  padded  ");
    }

    #[test]
    fn test_overlapping_sends_each_get_one_reply_with_unique_ids() {
        let mut conv = Conversation::new(GREETING, t0());
        let first = conv.send("one", t0()).unwrap();
        let second = conv.send("two", t0()).unwrap();
        assert_eq!(conv.outstanding(), 2);

        assert!(conv.deliver_reply(first, REPLY, t0()).is_some());
        assert!(conv.deliver_reply(second, REPLY, t0()).is_some());

        let ids: Vec<u32> = conv.messages().iter().map(|m| m.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let senders: Vec<Sender> = conv.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::Bot, Sender::User, Sender::User, Sender::Bot, Sender::Bot]
        );
    }

    #[test]
    fn test_end_makes_old_tickets_stale() {
        let mut conv = Conversation::new(GREETING, t0());
        let ticket = conv.send("hi", t0()).unwrap();

        conv.end(GREETING, t0());
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.outstanding(), 0);

        assert!(conv.deliver_reply(ticket, REPLY, t0()).is_none());
        assert_eq!(conv.len(), 1);
    }

    #[test]
    fn test_tickets_after_end_still_deliver() {
        let mut conv = Conversation::new(GREETING, t0());
        let stale = conv.send("before", t0()).unwrap();
        conv.end(GREETING, t0());
        let fresh = conv.send("after", t0()).unwrap();
        assert_eq!(fresh.session(), 1);

        assert!(conv.deliver_reply(stale, REPLY, t0()).is_none());
        assert!(conv.deliver_reply(fresh, REPLY, t0()).is_some());
        assert_eq!(conv.len(), 3);
        assert_eq!(conv.last().map(|m| m.sender), Some(Sender::Bot));
    }
}
