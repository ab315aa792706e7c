use crate::domain::ports::Notifier;
use crate::error::Result;
use async_trait::async_trait;

/// Prints confirmation messages to stdout instead of mailing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn render(to: &str, subject: &str, body: &str) -> String {
        format!("EMAIL INVIATA:\n   A: {to}\n   Oggetto: {subject}\n   Corpo:\n{body}")
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        println!("{}", Self::render(to, subject, body));
        Ok(())
    }
}
