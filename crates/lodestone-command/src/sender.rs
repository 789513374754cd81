//! The sender abstraction: who issued a command, and where its feedback
//! goes.
//!
//! `CommandSender` is a closed capability interface — the dispatcher only
//! ever calls `deliver_feedback` and never inspects the concrete type.
//! Senders are supplied by the transport/session layer per dispatch call;
//! the dispatcher never retains one.

use std::sync::mpsc;

use crate::format::strip_format_codes;

/// A participant that can issue commands and receive feedback.
pub trait CommandSender: Send + Sync {
    /// Display name used in logs and feedback.
    fn name(&self) -> &str;

    /// Routes a feedback line to wherever this sender reads it:
    /// the message surface for players, the operational log for the
    /// console. The string may carry `§` format markers.
    fn deliver_feedback(&self, message: &str);
}

/// An interactive participant: a connected player.
///
/// Holds the session layer's outbound channel; `send_message` hands the
/// text to the session for delivery. If the session is gone the message
/// is dropped with a trace, since a disconnecting player cannot read
/// feedback anyway.
pub struct PlayerSender {
    name: String,
    outbox: mpsc::Sender<String>,
}

impl PlayerSender {
    pub fn new(name: impl Into<String>, outbox: mpsc::Sender<String>) -> Self {
        Self {
            name: name.into(),
            outbox,
        }
    }

    /// Queues a chat message for this player.
    pub fn send_message(&self, message: &str) {
        if self.outbox.send(message.to_string()).is_err() {
            tracing::debug!(
                player = %self.name,
                "dropping feedback for a closed session channel"
            );
        }
    }
}

impl CommandSender for PlayerSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn deliver_feedback(&self, message: &str) {
        self.send_message(message);
    }
}

/// The non-interactive operator console.
///
/// Has no message surface of its own; feedback lands in the operational
/// log with format markers stripped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSender;

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        "CONSOLE"
    }

    fn deliver_feedback(&self, message: &str) {
        tracing::info!(
            target: "lodestone::console",
            "{}",
            strip_format_codes(message)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_feedback_lands_on_the_session_channel() {
        let (tx, rx) = mpsc::channel();
        let sender = PlayerSender::new("Steve", tx);
        sender.deliver_feedback("§aWelcome!");
        assert_eq!(rx.recv().unwrap(), "§aWelcome!");
    }

    #[test]
    fn test_player_feedback_after_disconnect_is_dropped() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let sender = PlayerSender::new("Steve", tx);
        // Must not panic or error out.
        sender.deliver_feedback("too late");
    }

    #[test]
    fn test_console_has_a_fixed_name() {
        assert_eq!(ConsoleSender.name(), "CONSOLE");
    }
}
