use std::io::{BufRead, Write};

use async_trait::async_trait;
use business::domain::notification::errors::NotificationError;
use notifier::PermissionPrompt;

/// Asks for notification permission on the controlling terminal.
pub struct TerminalPrompt {
    pub app_name: String,
}

#[async_trait]
impl PermissionPrompt for TerminalPrompt {
    async fn ask(&self) -> Result<Option<bool>, NotificationError> {
        let question = format!(
            "Allow {} to show expiry notifications? [y/n] ",
            self.app_name
        );

        tokio::task::spawn_blocking(move || -> std::io::Result<Option<bool>> {
            let mut stdout = std::io::stdout();
            write!(stdout, "{}", question)?;
            stdout.flush()?;

            let mut line = String::new();
            if std::io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            Ok(parse_answer(&line))
        })
        .await
        .map_err(|e| NotificationError::PermissionRequestFailed(e.to_string()))?
        .map_err(|e| NotificationError::PermissionRequestFailed(e.to_string()))
    }
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
