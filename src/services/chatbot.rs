use async_trait::async_trait;
use tracing::debug;

use super::system_prompt::SYSTEM_INSTRUCTION;
use crate::error::UpstreamError;

/// A text-generation backend: one system instruction plus one user prompt in, plain text out.
///
/// Implementations make at most one upstream call per invocation and hold no
/// per-request state, so a single instance is shared across all requests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, UpstreamError>;
}

/// Ask the generator about `prompt` under the fixed storefront instruction.
///
/// A blank answer is treated as no answer at all.
pub async fn generate_reply(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<String, UpstreamError> {
    let text = generator.generate(SYSTEM_INSTRUCTION, prompt).await?;

    if text.trim().is_empty() {
        return Err(UpstreamError::NoText);
    }

    debug!(chars = text.len(), "upstream reply received");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Echo {
        reply: String,
        seen: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl TextGenerator for Echo {
        async fn generate(&self, system: &str, prompt: &str) -> Result<String, UpstreamError> {
            self.seen
                .lock()
                .unwrap()
                .push((system.to_string(), prompt.to_string()));
            Ok(self.reply.clone())
        }
    }

    fn echo(reply: &str) -> Echo {
        Echo {
            reply: reply.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn attaches_system_instruction() {
        let generator = echo("Lifetime is **$15.00**.");
        let reply = generate_reply(&generator, "How much is lifetime?").await.unwrap();
        assert_eq!(reply, "Lifetime is **$15.00**.");

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, SYSTEM_INSTRUCTION);
        assert_eq!(seen[0].1, "How much is lifetime?");
    }

    #[tokio::test]
    async fn blank_reply_fails_closed() {
        let generator = echo("  \n");
        let err = generate_reply(&generator, "hello").await.unwrap_err();
        assert!(matches!(err, UpstreamError::NoText));
    }
}
