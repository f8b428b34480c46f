use crate::utils::error::Result;
use async_trait::async_trait;

/// Credentials and routing for the translator service. Values are handed to
/// the wire as-is; an unset value is an empty string.
pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn subscription_key(&self) -> &str;
    fn region(&self) -> &str;
}

#[async_trait]
pub trait Transliterator: Send + Sync {
    /// Returns one output per element of the service reply, in reply order.
    async fn transliterate(&self, texts: &[String]) -> Result<Vec<String>>;
}
