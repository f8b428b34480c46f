use serde::{Deserialize, Serialize};

/// One element of the request body: `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextItem<'a> {
    pub text: &'a str,
}

/// One element of the response body. Other keys the service sends, such as
/// `script`, are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransliteratedItem {
    pub text: String,
}

pub fn request_body(texts: &[String]) -> Vec<TextItem<'_>> {
    texts.iter().map(|text| TextItem { text }).collect()
}
