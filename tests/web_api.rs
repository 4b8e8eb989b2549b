use std::net::SocketAddr;

use axum::Router;
use reqwest::Client;
use serde_json::json;
use tokio::time::{Duration, sleep};
use tricard_bot::game::{Action, DecisionResponse};
use tricard_bot::policy::PolicyConfig;
use tricard_bot::{AgentConfig, web};

#[tokio::test]
async fn web_api_answers_decisions() -> anyhow::Result<()> {
    let app: Router = web::router(AgentConfig {
        seed: Some(17),
        ..AgentConfig::default()
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base_url = format!("http://{}", addr);
    let client = Client::builder().build()?;

    sleep(Duration::from_millis(25)).await;

    let health = client.get(format!("{}/healthz", base_url)).send().await?;
    assert_eq!(health.text().await?, "ok");

    let policy: PolicyConfig = client
        .get(format!("{}/api/policy", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(policy, PolicyConfig::default());

    let response: DecisionResponse = client
        .post(format!("{}/api/decide", base_url))
        .json(&json!({
            "your_hole": ["AH", "AD"],
            "table_card": "AC",
            "opponent_stats": {"fold": 1, "call": 1, "raise": 1},
            "your_points": 3,
            "opponent_points": 5
        }))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(response.action, Action::Raise);

    let malformed: DecisionResponse = client
        .post(format!("{}/api/decide", base_url))
        .body("{ not json")
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(malformed.action, Action::Fold);

    let not_utf8 = client
        .post(format!("{}/api/decide", base_url))
        .body(vec![0xff, 0xfe, 0x7b])
        .send()
        .await?;
    assert!(not_utf8.status().is_success());
    let not_utf8: DecisionResponse = not_utf8.json().await?;
    assert_eq!(not_utf8.action, Action::Fold);

    server.abort();
    let _ = server.await;
    Ok(())
}
