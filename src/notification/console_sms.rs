//! A transport that simulates SMS delivery by printing to the console.
//!
//! This serves as the reference implementation to validate the sender
//! seam and can be used for demos and debugging purposes.

use crate::core::MessageSender;
use async_trait::async_trait;
use std::io::Write;
use tracing::debug;

/// A `MessageSender` that reports deliveries on standard output.
///
/// Holds no state and performs a single locked write per call, so it is
/// safe to share across tasks without additional synchronization.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSmsSender;

#[async_trait]
impl MessageSender for ConsoleSmsSender {
    fn name(&self) -> &str {
        "console-sms"
    }

    /// Writes one delivery line to stdout for the given message.
    async fn send(&self, message: &str, recipient: &str) -> anyhow::Result<()> {
        debug!("Simulating SMS delivery to {}", recipient);

        // Locked write keeps the line atomic under concurrent callers.
        let mut out = std::io::stdout().lock();
        writeln!(out, "{} has been sent to {} via SMS.", message, recipient)?;
        Ok(())
    }
}
