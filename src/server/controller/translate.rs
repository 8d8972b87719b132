use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        translation::{
            TranslateBatchRequestDto, TranslateBatchResponseDto, TranslatePropertyRequestDto,
            TranslateRequestDto, TranslateResponseDto,
        },
    },
    server::model::app::AppState,
};

pub static TRANSLATION_TAG: &str = "translation";

/// Error reported to callers when the provider failed
pub static TRANSLATION_FAILED: &str = "Translation failed";

/// Translate a single string from the listing language
///
/// Provider failures never fail the request: the original text is returned together with a
/// generic error message.
#[utoipa::path(
    post,
    path = "/api/translate",
    tag = TRANSLATION_TAG,
    request_body = TranslateRequestDto,
    responses(
        (status = 200, description = "Translated text, or the original text with an error when translation failed", body = TranslateResponseDto),
        (status = 400, description = "Missing text or target language", body = ErrorDto)
    ),
)]
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequestDto>,
) -> impl IntoResponse {
    let (Some(text), Some(target_lang)) = (
        request.text.filter(|text| !text.is_empty()),
        non_blank(request.target_lang),
    ) else {
        return bad_request("Missing text or targetLang");
    };

    let response = match state.translator.try_translate(&text, &target_lang).await {
        Ok(translated_text) => TranslateResponseDto {
            translated_text,
            error: None,
        },
        Err(e) => {
            tracing::warn!(
                target_lang = %target_lang,
                "Translation failed, returning original text: {}",
                e
            );

            TranslateResponseDto {
                translated_text: text,
                error: Some(TRANSLATION_FAILED.to_string()),
            }
        }
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Translate several strings from the listing language
///
/// Texts are translated concurrently. A text whose translation failed keeps its original value
/// and its index is listed in `degraded`.
#[utoipa::path(
    post,
    path = "/api/translate/batch",
    tag = TRANSLATION_TAG,
    request_body = TranslateBatchRequestDto,
    responses(
        (status = 200, description = "Translated texts in request order", body = TranslateBatchResponseDto),
        (status = 400, description = "Missing texts or target language", body = ErrorDto)
    ),
)]
pub async fn translate_batch(
    State(state): State<AppState>,
    Json(request): Json<TranslateBatchRequestDto>,
) -> impl IntoResponse {
    let (Some(texts), Some(target_lang)) = (request.texts, non_blank(request.target_lang)) else {
        return bad_request("Missing texts or targetLang");
    };

    let outcomes = state
        .translator
        .translate_all_detailed(&texts, &target_lang)
        .await;

    let degraded = outcomes
        .iter()
        .enumerate()
        .filter(|(_, outcome)| outcome.is_degraded())
        .map(|(index, _)| index)
        .collect();

    let response = TranslateBatchResponseDto {
        translated_texts: outcomes.into_iter().map(|outcome| outcome.text).collect(),
        degraded,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Translate the text fields of a property listing
///
/// `name`, `description`, `street`, `zone` and `locality` are translated when they hold strings
/// and `features`, a JSON-encoded array of labels, is replaced by the array of translated labels.
/// Other fields are returned unchanged.
#[utoipa::path(
    post,
    path = "/api/translate/property",
    tag = TRANSLATION_TAG,
    request_body = TranslatePropertyRequestDto,
    responses(
        (status = 200, description = "Property listing with translated fields", content_type = "application/json"),
        (status = 400, description = "Missing property or target language", body = ErrorDto)
    ),
)]
pub async fn translate_property(
    State(state): State<AppState>,
    Json(request): Json<TranslatePropertyRequestDto>,
) -> impl IntoResponse {
    let (Some(property), Some(target_lang)) = (request.property, non_blank(request.target_lang))
    else {
        return bad_request("Missing property or targetLang");
    };

    let translated = state
        .translator
        .translate_property(property, &target_lang)
        .await;

    (StatusCode::OK, Json(translated)).into_response()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn bad_request(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}
