use serde::{Deserialize, Serialize};

/// Request body for translating a single string
///
/// Both fields are optional at the deserialization level so that a missing field results in a
/// 400 response with an [`ErrorDto`](crate::model::api::ErrorDto) body rather than an extractor
/// rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequestDto {
    /// Text to translate
    pub text: Option<String>,
    /// Target language code, e.g. `en`
    pub target_lang: Option<String>,
}

/// Response body for a single string translation
///
/// `error` is only present when the translation provider failed, in which case
/// `translated_text` holds the original text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponseDto {
    /// Translated text, or the original text when translation failed
    pub translated_text: String,
    /// Generic failure notice; provider details stay in the server log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body for translating several strings at once
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TranslateBatchRequestDto {
    /// Texts to translate, order is preserved in the response
    pub texts: Option<Vec<String>>,
    /// Target language code, e.g. `en`
    pub target_lang: Option<String>,
}

/// Response body for a batch translation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TranslateBatchResponseDto {
    /// Translated texts in request order
    pub translated_texts: Vec<String>,
    /// Indexes of texts that fell back to their original value
    pub degraded: Vec<usize>,
}

/// Request body for translating the text-bearing fields of a property listing
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TranslatePropertyRequestDto {
    /// Property listing as a JSON object
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub property: Option<serde_json::Value>,
    /// Target language code, e.g. `en`
    pub target_lang: Option<String>,
}
