//! Concrete transports that fulfill the message-sending capability.
//!
//! The notifier depends only on the `MessageSender` trait defined in
//! `core`, so the transports in this module are swappable without the
//! caller being aware of the specific implementation in use.

pub mod console_sms;

pub use console_sms::ConsoleSmsSender;
