use crate::core::endpoint::transliterate_url;
use crate::core::{ConfigProvider, Result, TransliteratedItem, Transliterator};
use crate::domain::model::request_body;
use crate::utils::error::TranslitError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

/// Transliterates romanized Sinhala into Sinhala script.
///
/// A fresh HTTP client is created for the call and dropped when it returns,
/// on success and on every error path. Use [`AzureTransliterator`] to share a
/// client between calls.
pub async fn transliterate_to_sinhala<C>(config: &C, texts: &[String]) -> Result<Vec<String>>
where
    C: ConfigProvider + ?Sized,
{
    let client = Client::new();
    send_transliteration(&client, config, texts).await
}

/// Azure Translator backed [`Transliterator`].
#[derive(Debug, Clone)]
pub struct AzureTransliterator<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> AzureTransliterator<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Uses a caller-owned client, e.g. one with a custom timeout or proxy.
    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl<C: ConfigProvider> Transliterator for AzureTransliterator<C> {
    async fn transliterate(&self, texts: &[String]) -> Result<Vec<String>> {
        send_transliteration(&self.client, &self.config, texts).await
    }
}

async fn send_transliteration<C>(
    client: &Client,
    config: &C,
    texts: &[String],
) -> Result<Vec<String>>
where
    C: ConfigProvider + ?Sized,
{
    let url = transliterate_url(config.endpoint())?;
    tracing::debug!("transliterate_to_sinhala url: {}", url);

    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .header(SUBSCRIPTION_KEY_HEADER, config.subscription_key())
        .header(SUBSCRIPTION_REGION_HEADER, config.region())
        .json(&request_body(texts))
        .send()
        .await?;

    // Non-2xx replies are not rejected here; an error object fails the shape
    // check below and carries the status along.
    let status = response.status();
    tracing::debug!("Transliterate response status: {}", status);

    let raw = response.bytes().await?;
    tracing::debug!(
        "Response from azure transliterate: {}",
        String::from_utf8_lossy(&raw)
    );

    let payload: serde_json::Value = serde_json::from_slice(&raw)?;
    let items: Vec<TransliteratedItem> =
        serde_json::from_value(payload).map_err(|e| TranslitError::DataShape {
            status: status.as_u16(),
            message: e.to_string(),
        })?;

    Ok(items.into_iter().map(|item| item.text).collect())
}
