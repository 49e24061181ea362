//! Image acquisition tests against a local mock render service.

use async_trait::async_trait;

use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fluxy_core::{GenerateRequest, GenerateResponse, ImageConfig, RenderServiceConfig};
use fluxy_error::{FluxyResult, HttpError};
use fluxy_image::ImageAcquirer;
use fluxy_interface::FluxyDriver;

/// Driver that always answers with a fixed prompt line, or always fails.
struct StaticDriver {
    reply: Option<String>,
}

#[async_trait]
impl FluxyDriver for StaticDriver {
    async fn generate(&self, _req: &GenerateRequest) -> FluxyResult<GenerateResponse> {
        match &self.reply {
            Some(text) => Ok(GenerateResponse { text: text.clone() }),
            None => Err(HttpError::new("model down").into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }

    fn model_name(&self) -> &str {
        "static"
    }
}

fn test_config(endpoint: &str) -> ImageConfig {
    ImageConfig {
        services: vec![
            RenderServiceConfig {
                name: "primary".to_string(),
                endpoint: endpoint.to_string(),
                model: Some("flux".to_string()),
            },
            RenderServiceConfig {
                name: "secondary".to_string(),
                endpoint: endpoint.to_string(),
                model: Some("turbo".to_string()),
            },
        ],
        width: 320,
        height: 200,
        attempts_per_service: 2,
        retry_backoff_ms: 1,
        min_bytes: 16,
        timeout_secs: 5,
    }
}

fn acquirer(reply: Option<&str>, endpoint: &str) -> ImageAcquirer<StaticDriver> {
    ImageAcquirer::new(
        StaticDriver {
            reply: reply.map(str::to_string),
        },
        test_config(endpoint),
    )
    .unwrap()
}

#[tokio::test]
async fn overload_on_every_service_falls_back_to_svg() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(530))
        .mount(&server)
        .await;

    let acquirer = acquirer(Some("abstract tech illustration"), &server.uri());
    let asset = acquirer.acquire("아이폰 배터리 절약", "요약").await;

    assert_eq!(asset.mime, "image/svg+xml");
    let markup = String::from_utf8(asset.data).unwrap();
    assert!(markup.contains("아이폰 배터리 절약"));

    // Retry budget honored: attempts_per_service x services, no more.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
}

#[tokio::test]
async fn undersized_payloads_are_rejected_as_error_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 4]))
        .mount(&server)
        .await;

    let acquirer = acquirer(Some("prompt"), &server.uri());
    let asset = acquirer.acquire("주제", "요약").await;

    assert_eq!(asset.mime, "image/svg+xml");
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
}

#[tokio::test]
async fn second_service_rescues_after_first_is_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("model", "flux"))
        .respond_with(ResponseTemplate::new(530))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("model", "turbo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0u8; 64])
                .insert_header("content-type", "image/jpeg"),
        )
        .mount(&server)
        .await;

    let acquirer = acquirer(Some("prompt"), &server.uri());
    let asset = acquirer.acquire("주제", "요약").await;

    assert_eq!(asset.mime, "image/jpeg");
    assert_eq!(asset.data.len(), 64);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn permanent_rejections_advance_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let acquirer = acquirer(Some("prompt"), &server.uri());
    let asset = acquirer.acquire("주제", "요약").await;

    assert_eq!(asset.mime, "image/svg+xml");
    // One attempt per service, no same-service retry for a 404.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn failed_prompt_synthesis_uses_the_deterministic_template() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0u8; 64])
                .insert_header("content-type", "image/png"),
        )
        .mount(&server)
        .await;

    let acquirer = acquirer(None, &server.uri());
    let asset = acquirer.acquire("topic-word", "요약").await;

    assert_eq!(asset.mime, "image/png");
    let requests = server.received_requests().await.unwrap();
    // The template, not a model response, lands percent-encoded in the path.
    assert!(requests[0].url.path().contains("high%20quality"));
    assert!(requests[0].url.path().contains("topic-word"));
}

#[tokio::test]
async fn seed_and_dimensions_ride_in_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0u8; 64])
                .insert_header("content-type", "image/png"),
        )
        .mount(&server)
        .await;

    let acquirer = acquirer(Some("prompt"), &server.uri());
    acquirer.acquire("주제", "요약").await;

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(query.contains("width=320"));
    assert!(query.contains("height=200"));
    assert!(query.contains("seed="));
    assert!(query.contains("nologo=true"));
}
