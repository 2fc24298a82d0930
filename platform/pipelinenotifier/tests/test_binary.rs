use pipelinenotifier::config::{DISCORD_WEBHOOKS_URL, PIPELINE_NAME};
use std::process::Command;

const BINARY: &str = env!("CARGO_BIN_EXE_pipelinenotifier");

#[test]
fn test_exits_with_failure_when_pipeline_name_missing() {
    let output = Command::new(BINARY)
        .env_remove(PIPELINE_NAME)
        .env(DISCORD_WEBHOOKS_URL, "https://discord.com/api/webhooks/42/token")
        .env_remove("LOG_FORMAT")
        .output()
        .expect("Failed to run binary.");

    assert!(!output.status.success());
    assert_eq!(Some(1), output.status.code());
}

#[test]
fn test_exits_successfully_with_full_configuration() {
    let output = Command::new(BINARY)
        .env(PIPELINE_NAME, "my-pipe")
        .env(DISCORD_WEBHOOKS_URL, "https://discord.com/api/webhooks/42/secret-token")
        .env("LOG_FORMAT", "json")
        .output()
        .expect("Failed to run binary.");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("secret-token"));
}
