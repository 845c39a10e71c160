//! Request validation and dispatch to the injected message sender.
//!
//! The `Notifier` is deliberately unaware of which transport it is
//! talking to; it validates notification requests and forwards them
//! through the `MessageSender` trait supplied at construction time.

use crate::core::MessageSender;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum NotifyError {
    /// No message sender was supplied before `build()` was called.
    #[error("message sender dependency is missing")]
    NullDependency,

    /// A notification argument was empty at call time.
    #[error("invalid argument: {field} cannot be empty")]
    InvalidArgument { field: &'static str },

    /// The underlying transport reported a delivery failure.
    #[error("transport error: {0}")]
    Transport(#[source] anyhow::Error),
}

/// Validates notification requests and forwards them to the configured
/// message sender.
///
/// The sender reference is set at construction and immutable thereafter,
/// so a `Notifier` can be invoked concurrently without locking as long as
/// the transport itself is safe for concurrent use.
pub struct Notifier {
    sender: Arc<dyn MessageSender>,
}

impl Notifier {
    /// Creates a new `NotifierBuilder` to construct a `Notifier`.
    pub fn builder() -> NotifierBuilder {
        NotifierBuilder::new()
    }

    /// Validates `message` and `recipient`, then delegates both unchanged
    /// to the held sender.
    ///
    /// The notifier keeps no state between calls; repeated calls with the
    /// same arguments produce independent deliveries.
    pub async fn notify(&self, message: &str, recipient: &str) -> Result<(), NotifyError> {
        if message.is_empty() {
            return Err(NotifyError::InvalidArgument { field: "message" });
        }
        if recipient.is_empty() {
            return Err(NotifyError::InvalidArgument { field: "recipient" });
        }

        debug!("Dispatching notification via {}", self.sender.name());
        self.sender
            .send(message, recipient)
            .await
            .map_err(NotifyError::Transport)
    }
}

/// Builder for [`Notifier`].
///
/// This pattern keeps the dependency requirement explicit at the wiring
/// site: `build()` refuses to produce a `Notifier` until a sender has
/// been supplied.
#[derive(Default)]
pub struct NotifierBuilder {
    sender: Option<Arc<dyn MessageSender>>,
}

impl NotifierBuilder {
    /// Creates a builder with no sender configured.
    pub fn new() -> Self {
        Self { sender: None }
    }

    /// Sets the message sender the notifier will delegate to.
    pub fn sender(mut self, sender: Arc<dyn MessageSender>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Builds the `Notifier`, failing with [`NotifyError::NullDependency`]
    /// if no sender was supplied.
    pub fn build(self) -> Result<Notifier, NotifyError> {
        let sender = self.sender.ok_or(NotifyError::NullDependency)?;
        Ok(Notifier { sender })
    }
}
