//! End-to-end tests for the console notification pipeline.

use gag::BufferRedirect;
use notifier::{ConsoleSmsSender, Notifier, NotifyError};
use serial_test::serial;
use std::io::Read;
use std::sync::Arc;

fn console_notifier() -> Notifier {
    Notifier::builder()
        .sender(Arc::new(ConsoleSmsSender))
        .build()
        .expect("sender was supplied")
}

#[tokio::test]
#[serial]
async fn test_console_pipeline_writes_expected_line() {
    // 1. Wire the console transport into a notifier.
    let notifier = console_notifier();

    // 2. Capture stdout while sending the sample notification.
    let mut captured = String::new();
    {
        let mut redirect = BufferRedirect::stdout().unwrap();
        notifier
            .notify("Hello, this is your verification code", "0933873...")
            .await
            .unwrap();
        redirect.read_to_string(&mut captured).unwrap();
    }

    // 3. Assert exactly one formatted delivery line was written.
    assert_eq!(
        captured,
        "Hello, this is your verification code has been sent to 0933873... via SMS.\n"
    );
}

#[tokio::test]
#[serial]
async fn test_repeated_notifications_write_identical_lines() {
    let notifier = console_notifier();

    let mut captured = String::new();
    {
        let mut redirect = BufferRedirect::stdout().unwrap();
        notifier.notify("ping", "+15550100").await.unwrap();
        notifier.notify("ping", "+15550100").await.unwrap();
        redirect.read_to_string(&mut captured).unwrap();
    }

    let lines: Vec<&str> = captured.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "ping has been sent to +15550100 via SMS.");
    assert_eq!(lines[0], lines[1]);
}

#[tokio::test]
#[serial]
async fn test_rejected_notification_writes_nothing() {
    let notifier = console_notifier();

    let mut captured = String::new();
    let result = {
        let mut redirect = BufferRedirect::stdout().unwrap();
        let result = notifier.notify("", "+15550100").await;
        redirect.read_to_string(&mut captured).unwrap();
        result
    };

    assert!(matches!(
        result,
        Err(NotifyError::InvalidArgument { field: "message" })
    ));
    assert!(captured.is_empty());
}
