use vitrina::{
    model::translation::TranslateBatchRequestDto, server::controller::translate::translate_batch,
};

use super::*;

fn request(texts: Option<&[&str]>, target_lang: Option<&str>) -> Json<TranslateBatchRequestDto> {
    Json(TranslateBatchRequestDto {
        texts: texts.map(|texts| texts.iter().map(|text| text.to_string()).collect()),
        target_lang: target_lang.map(str::to_string),
    })
}

/// Tests translating a list of texts.
///
/// Verifies that order is preserved and every text is translated.
///
/// Expected: 200 with translations in request order and nothing degraded
#[tokio::test]
async fn translates_every_text_in_order() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_translation("Parcare", "en", "Parking", 1)
        .with_translation("Balcon", "en", "Balcony", 1)
        .with_translation("Grădină", "en", "Garden", 1)
        .build()
        .await
        .unwrap();
    let state = test.app_state()?;

    let response = translate_batch(
        State(state),
        request(Some(&["Parcare", "Balcon", "Grădină"]), Some("en")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "translatedTexts": ["Parking", "Balcony", "Garden"],
            "degraded": []
        })
    );
    test.assert_mocks();

    Ok(())
}

/// Tests a batch where one translation fails.
///
/// Verifies that the failing element keeps its original text while the others are translated.
///
/// Expected: 200 with the failing index listed in `degraded`
#[tokio::test]
async fn failing_element_falls_back_alone() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_translation("Parcare", "en", "Parking", 1)
        .with_failing_translation("Garaj", 500, 1)
        .build()
        .await
        .unwrap();
    let state = test.app_state()?;

    let response = translate_batch(State(state), request(Some(&["Parcare", "Garaj"]), Some("en")))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "translatedTexts": ["Parking", "Garaj"],
            "degraded": [1]
        })
    );
    test.assert_mocks();

    Ok(())
}

/// Tests an empty batch.
///
/// Expected: 200 with an empty list
#[tokio::test]
async fn empty_batch() -> Result<(), Error> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = test.app_state()?;

    let response = translate_batch(State(state), request(Some(&[]), Some("en")))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "translatedTexts": [], "degraded": [] })
    );

    Ok(())
}

/// Tests an unreachable translation provider.
///
/// Verifies that every text falls back to its original value when the connection is refused.
///
/// Expected: 200 with the original texts and every index in `degraded`
#[tokio::test]
async fn unreachable_provider_degrades_every_text() -> Result<(), Error> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = test.app_state_with_translate_api_url(UNREACHABLE_TRANSLATE_API_URL)?;

    let response = translate_batch(State(state), request(Some(&["Casă", "Balcon"]), Some("en")))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "translatedTexts": ["Casă", "Balcon"], "degraded": [0, 1] })
    );

    Ok(())
}

/// Tests requests missing a field.
///
/// Expected: 400 with an error body
#[tokio::test]
async fn missing_fields_are_rejected() -> Result<(), Error> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = test.app_state()?;

    for request in [request(None, Some("en")), request(Some(&["Parcare"]), None)] {
        let response = translate_batch(State(state.clone()), request)
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    Ok(())
}
