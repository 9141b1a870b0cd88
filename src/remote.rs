//! Remote Result Slots
//!
//! Holds the latest text returned by a host command. Requests are numbered
//! when issued; only the most recently issued one may settle the slot, so a
//! slow response can never overwrite a newer one.

use crate::commands::{Command, CommandInvoker};

/// Issue number of a request against one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Latest result of one host command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteSlot {
    text: String,
    error: Option<String>,
    pending: bool,
    issued: u64,
}

impl RemoteSlot {
    /// Text of the last successful response (empty until one arrives)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Message of the last settled request, if it failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Register a new request and return its ticket
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.pending = true;
        Ticket(self.issued)
    }

    /// Apply `outcome` if `ticket` is the latest issued request.
    ///
    /// Returns false when the ticket was superseded; the slot is untouched.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<String, String>) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.pending = false;
        match outcome {
            Ok(text) => {
                self.text = text;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }
}

/// Run one host command to completion
pub async fn dispatch<I>(invoker: &I, command: &Command) -> Result<String, String>
where
    I: CommandInvoker + ?Sized,
{
    invoker.invoke(command).await
}
