//! Core service traits for the notifier
//!
//! This module defines the trait contracts that govern component
//! interactions throughout the application.

use anyhow::Result;
use async_trait::async_trait;

/// Delivers messages to a recipient over some concrete transport
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// A unique, descriptive name for the transport (e.g., "console-sms").
    /// Used for logging.
    fn name(&self) -> &str;

    /// Sends a message to the given recipient
    ///
    /// # Arguments
    /// * `message` - The message content to deliver
    /// * `recipient` - The destination address (phone number or email)
    ///
    /// # Returns
    /// * `Ok(())` if the message was handed off to the transport
    /// * `Err` if delivery failed (network error, formatting error, etc.)
    async fn send(&self, message: &str, recipient: &str) -> Result<()>;
}
