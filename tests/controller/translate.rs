use vitrina::{
    model::translation::TranslateRequestDto,
    server::controller::translate::{translate, TRANSLATION_FAILED},
};

use super::*;

fn request(text: Option<&str>, target_lang: Option<&str>) -> Json<TranslateRequestDto> {
    Json(TranslateRequestDto {
        text: text.map(str::to_string),
        target_lang: target_lang.map(str::to_string),
    })
}

/// Tests translating a single string.
///
/// Verifies that the provider's translation is returned without an error field.
///
/// Expected: 200 with `{"translatedText": "House"}`
#[tokio::test]
async fn translates_text() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_translation("Casă", "en", "House", 1)
        .build()
        .await
        .unwrap();
    let state = test.app_state()?;

    let response = translate(State(state), request(Some("Casă"), Some("en")))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "translatedText": "House" }));
    test.assert_mocks();

    Ok(())
}

/// Tests that translations are memoized across requests.
///
/// Verifies that the second request for the same text and language does not reach the
/// provider.
///
/// Expected: both requests return the translation, provider called once
#[tokio::test]
async fn second_request_is_served_from_cache() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_translation("Casă", "en", "House", 1)
        .build()
        .await
        .unwrap();
    let state = test.app_state()?;

    for _ in 0..2 {
        let response = translate(State(state.clone()), request(Some("Casă"), Some("en")))
            .await
            .into_response();

        assert_eq!(json_body(response).await["translatedText"], "House");
    }
    test.assert_mocks();

    Ok(())
}

/// Tests translating into the listing language.
///
/// Verifies that the text is returned as is without calling the provider.
///
/// Expected: 200 with the original text, provider never called
#[tokio::test]
async fn same_language_is_not_translated() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_failing_translation("Casă", 500, 0)
        .build()
        .await
        .unwrap();
    let state = test.app_state()?;

    let response = translate(State(state), request(Some("Casă"), Some("ro")))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "translatedText": "Casă" }));
    test.assert_mocks();

    Ok(())
}

/// Tests a provider failure.
///
/// Verifies that the request still succeeds with the original text and reports the error.
///
/// Expected: 200 with `translatedText` equal to the input and an `error` field
#[tokio::test]
async fn provider_failure_returns_original_text() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_failing_translation("Casă", 500, 1)
        .build()
        .await
        .unwrap();
    let state = test.app_state()?;

    let response = translate(State(state), request(Some("Casă"), Some("en")))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["translatedText"], "Casă");
    assert_eq!(body["error"], TRANSLATION_FAILED);
    test.assert_mocks();

    Ok(())
}

/// Tests an unreachable translation provider.
///
/// Verifies that a refused connection falls back to the original text and that the reported
/// error does not carry the API key.
///
/// Expected: 200 with `translatedText` equal to the input and a generic `error`
#[tokio::test]
async fn unreachable_provider_returns_original_text() -> Result<(), Error> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = test.app_state_with_translate_api_url(UNREACHABLE_TRANSLATE_API_URL)?;

    let response = translate(State(state), request(Some("Casă"), Some("en")))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["translatedText"], "Casă");
    let error = body["error"].as_str().expect("error should be a string");
    assert_eq!(error, TRANSLATION_FAILED);
    assert!(!error.contains(TEST_TRANSLATE_API_KEY));
    assert!(!error.contains(UNREACHABLE_TRANSLATE_API_URL));

    Ok(())
}

/// Tests that failed translations are not memoized.
///
/// Verifies that every request retries the provider after a failure.
///
/// Expected: provider called once per request
#[tokio::test]
async fn failures_are_not_cached() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_failing_translation("Casă", 503, 2)
        .build()
        .await
        .unwrap();
    let state = test.app_state()?;

    for _ in 0..2 {
        let response = translate(State(state.clone()), request(Some("Casă"), Some("en")))
            .await
            .into_response();

        assert_eq!(json_body(response).await["translatedText"], "Casă");
    }
    test.assert_mocks();

    Ok(())
}

/// Tests requests missing a field.
///
/// Verifies that missing or empty text and target language are rejected.
///
/// Expected: 400 with an error body
#[tokio::test]
async fn missing_fields_are_rejected() -> Result<(), Error> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = test.app_state()?;

    for request in [
        request(None, Some("en")),
        request(Some("Casă"), None),
        request(Some(""), Some("en")),
        request(Some("Casă"), Some(" ")),
    ] {
        let response = translate(State(state.clone()), request).await.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    Ok(())
}
