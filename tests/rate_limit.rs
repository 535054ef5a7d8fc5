use std::net::{Ipv4Addr, SocketAddr};

use contact_relay::{
    domain::contact::{ProviderStatus, RelayPolicy},
    infrastructure::http::{
        rate_limit::RateLimitConfig,
        servers::http::HttpServer,
        state::{AppConfig, AppState},
        Server,
    },
};
use reqwest::{
    header::{
        ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN, RETRY_AFTER,
    },
    Client, Method, StatusCode,
};
use serde_json::{json, Value};
use testresult::TestResult;

mod common;

use common::{credentials, service, MockProvider, BOT_TOKEN, CHAT_ID};

const SITE: &str = "https://remonty.example.com";
const BURST: u32 = 3;

/// Starts a rate-limited server in the background and returns its base URL.
async fn start_server(provider: &MockProvider) -> anyhow::Result<String> {
    let state = AppState::new(
        AppConfig {
            allowed_origin: "*".to_string(),
            provider: ProviderStatus::from_parts(Some(BOT_TOKEN), Some(CHAT_ID)),
        },
        service(&provider.url, credentials(), RelayPolicy::default())?,
    );

    let server = HttpServer::new(
        SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
        RateLimitConfig {
            per_second: 60,
            burst_size: BURST,
        },
        state,
    )
    .await?;
    let address = server.local_addr()?;

    tokio::spawn(server.run());

    Ok(format!("http://{address}/api/v1/contact"))
}

fn anna() -> Value {
    json!({
        "name": "Anna Kowalska",
        "email": "anna@example.com",
        "phone": "+48123456789",
        "message": "Proszę o kontakt"
    })
}

#[tokio::test]
async fn preflights_are_not_counted_and_429_carries_cors_headers() -> TestResult {
    let provider = MockProvider::accepting().await?;
    let url = start_server(&provider).await?;
    let client = Client::new();

    for round in 0..=BURST {
        let preflight = client
            .request(Method::OPTIONS, &url)
            .header(ORIGIN, SITE)
            .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .send()
            .await?;

        assert_eq!(preflight.status(), StatusCode::OK, "preflight in round {round}");

        let response = client
            .post(&url)
            .header(ORIGIN, SITE)
            .json(&anna())
            .send()
            .await?;

        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).map(|v| v.as_bytes()),
            Some(&b"*"[..]),
            "CORS header in round {round}"
        );

        if round < BURST {
            assert_eq!(response.status(), StatusCode::OK, "post in round {round}");
        } else {
            assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
            assert!(response.headers().contains_key(RETRY_AFTER));

            let body = response.json::<Value>().await?;

            assert_eq!(body["success"], false);
            assert_eq!(body["error"], "Too many requests");
            assert!(body["retry_after"].as_u64().is_some());
        }
    }

    assert_eq!(provider.calls(), BURST as usize);

    Ok(())
}
