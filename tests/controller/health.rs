use vitrina::server::controller::health::health;

use super::*;

/// Tests the health check with a reachable database.
///
/// Expected: 200 with `status` ok and `database` true
#[tokio::test]
async fn reports_ok_when_database_answers() -> Result<(), Error> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = test.app_state()?;

    let response = health(State(state)).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], true);
    assert!(body["checkedAt"].is_string());

    Ok(())
}

/// Tests the health check after the database went away.
///
/// Verifies that the ping is retried and the outage reported instead of failing the request.
///
/// Expected: 503 with `database` false
#[tokio::test]
async fn reports_unavailable_when_database_is_unreachable() -> Result<(), Error> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = test.app_state()?;
    test.disconnect_database().await.unwrap();

    let response = health(State(state)).await.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], false);

    Ok(())
}
