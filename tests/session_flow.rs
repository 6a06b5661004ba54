//! End-to-end session flow: real controller and HTTP client against a stub
//! recorder backend.

use axum::{http::StatusCode, response::Json, routing::post, Router};
use gravia::client::HttpRecorderClient;
use gravia::session::{SessionController, SessionPhase};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

fn controller_for(base_url: &str) -> SessionController {
    let client = HttpRecorderClient::new(base_url, Duration::from_secs(5)).unwrap();
    SessionController::new(Arc::new(client))
}

#[tokio::test]
async fn full_session_round_trip() {
    let router = Router::new()
        .route(
            "/v1/iniciar-gravacao",
            post(|| async { Json(json!({"status": 200, "message": "Gravação iniciada com sucesso."})) }),
        )
        .route(
            "/v1/parar-gravacao",
            post(|| async { Json(json!({"status": 200, "message": "Gravação encerrada e processada."})) }),
        );
    let base_url = serve(router).await;
    let controller = controller_for(&base_url);

    let status = controller.start().await.unwrap();
    assert_eq!(status.phase, SessionPhase::Recording);
    assert_eq!(status.message, "Gravação iniciada com sucesso.");
    assert!(status.started_at.is_some());

    let status = controller.stop().await.unwrap();
    assert_eq!(status.phase, SessionPhase::Idle);
    assert_eq!(status.message, "Gravação encerrada e processada.");
    assert!(status.started_at.is_none());
}

#[tokio::test]
async fn stop_failure_keeps_session_recording() {
    let router = Router::new()
        .route(
            "/v1/iniciar-gravacao",
            post(|| async { Json(json!({"message": "gravação iniciada"})) }),
        )
        .route(
            "/v1/parar-gravacao",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "Nenhuma gravação em andamento."})),
                )
            }),
        );
    let base_url = serve(router).await;
    let controller = controller_for(&base_url);

    controller.start().await.unwrap();
    let err = controller.stop().await.unwrap_err();
    assert!(err.to_string().contains("failed to stop"));
    assert!(err.to_string().contains("Nenhuma gravação em andamento."));

    let status = controller.status().await;
    assert_eq!(status.phase, SessionPhase::Recording);
    assert!(status.message.contains("failed to stop"));
}

#[tokio::test]
async fn unreachable_recorder_leaves_session_idle() {
    // Bind and drop a listener to get a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
    drop(listener);

    let controller = controller_for(&base_url);
    let err = controller.start().await.unwrap_err();
    assert!(err.to_string().contains("failed to start"));

    let status = controller.status().await;
    assert_eq!(status.phase, SessionPhase::Idle);
    assert!(status.message.contains("failed to start"));
}

#[tokio::test]
async fn second_start_is_rejected_while_recording() {
    let router = Router::new().route(
        "/v1/iniciar-gravacao",
        post(|| async { Json(json!({"message": "gravação iniciada"})) }),
    );
    let base_url = serve(router).await;
    let controller = controller_for(&base_url);

    controller.start().await.unwrap();
    let err = controller.start().await.unwrap_err();
    assert!(err.to_string().contains("cannot start"));

    // The rejected call did not disturb the session
    assert_eq!(controller.status().await.phase, SessionPhase::Recording);
}
