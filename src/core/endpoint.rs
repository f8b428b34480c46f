use crate::utils::error::{Result, TranslitError};
use url::Url;

/// Path appended to the configured resource endpoint.
pub const TRANSLITERATE_PATH: [&str; 5] =
    ["translator", "text", "v3.0", "translate", "transliterate"];

/// Fixed query: romanized (Latn) Sinhala into Sinhala script.
pub const TRANSLITERATE_QUERY: [(&str, &str); 4] = [
    ("api-version", "3.0"),
    ("language", "si"),
    ("fromScript", "Latn"),
    ("toScript", "Sinh"),
];

/// Builds the transliterate URL for a resource endpoint.
///
/// The fixed path is always appended after the endpoint's own path, with
/// empty segments dropped, so `https://host`, `https://host/` and
/// `https://host//` all resolve to the same URL. Any query or fragment on
/// the endpoint is replaced.
pub fn transliterate_url(endpoint: &str) -> Result<Url> {
    let invalid = |reason: String| TranslitError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let mut url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;

    let mut segments: Vec<String> = url
        .path_segments()
        .ok_or_else(|| invalid("URL cannot be used as a base".to_string()))?
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    segments.extend(TRANSLITERATE_PATH.iter().map(|s| s.to_string()));

    url.set_path(&format!("/{}", segments.join("/")));
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .extend_pairs(TRANSLITERATE_QUERY.iter());

    Ok(url)
}
