//! Notifier - Console SMS notification demo
//!
//! Wires the console SMS transport into a `Notifier` and issues a single
//! sample notification.

use anyhow::Result;
use log::info;
use notifier::{ConsoleSmsSender, Notifier};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Notifier starting up...");

    // The transport is chosen here; swapping in another `MessageSender`
    // implementation only changes this line.
    let sender = Arc::new(ConsoleSmsSender);

    let alert = Notifier::builder().sender(sender).build()?;
    alert
        .notify("Hello, this is your verification code", "0933873...")
        .await?;

    info!("Notification dispatched.");
    Ok(())
}
