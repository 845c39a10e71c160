/// Notifier - A minimal dependency-inverted notification service
///
/// This library separates notification requests from message delivery:
/// callers depend on the `MessageSender` trait, and concrete transports
/// (currently a console-simulated SMS sender) fulfill it.
pub mod core;
pub mod notification;
pub mod notifier;

// Re-export core types for convenience
pub use crate::core::MessageSender;
pub use crate::notification::ConsoleSmsSender;
pub use crate::notifier::{Notifier, NotifierBuilder, NotifyError};
