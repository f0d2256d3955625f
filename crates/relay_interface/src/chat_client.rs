//! Remote chat model seam.

use async_trait::async_trait;
use relay_core::ChatResponse;
use relay_error::RelayResult;

/// A remote model that answers one single-turn request at a time.
///
/// Implementations send exactly the system instruction and the user text,
/// with no earlier conversation history, and return the complete
/// (non-streamed) reply.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send one request and wait for the full reply.
    async fn send(&self, system: &str, user_text: &str) -> RelayResult<ChatResponse>;
}

#[async_trait]
impl<C> ChatClient for &C
where
    C: ChatClient + ?Sized,
{
    async fn send(&self, system: &str, user_text: &str) -> RelayResult<ChatResponse> {
        (**self).send(system, user_text).await
    }
}

#[async_trait]
impl<C> ChatClient for Box<C>
where
    C: ChatClient + ?Sized,
{
    async fn send(&self, system: &str, user_text: &str) -> RelayResult<ChatResponse> {
        (**self).send(system, user_text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl ChatClient for Echo {
        async fn send(&self, system: &str, user_text: &str) -> RelayResult<ChatResponse> {
            Ok(ChatResponse::from_text(format!("{system}|{user_text}")))
        }
    }

    #[tokio::test]
    async fn boxed_client_forwards() {
        let client: Box<dyn ChatClient> = Box::new(Echo);
        let response = client.send("sys", "hi").await.unwrap();
        assert_eq!(response.texts().collect::<Vec<_>>(), ["sys|hi"]);
    }

    async fn ask<C: ChatClient>(client: C) -> ChatResponse {
        client.send("a", "b").await.unwrap()
    }

    #[tokio::test]
    async fn borrowed_client_forwards() {
        let echo = Echo;
        let response = ask(&echo).await;
        assert_eq!(response.texts().next(), Some("a|b"));
    }
}
