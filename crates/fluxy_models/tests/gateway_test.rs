//! Tests for the model gateway's fallback behavior.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fluxy_core::{GenerateRequest, GenerateResponse};
use fluxy_error::{FluxyResult, HttpError};
use fluxy_interface::FluxyDriver;
use fluxy_models::ModelGateway;

/// Backend fake that either always fails or always replies with a fixed
/// string, counting how often it is called.
struct ScriptedBackend {
    model: String,
    reply: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedBackend {
    fn succeeding(model: &str, reply: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                model: model.to_string(),
                reply: Some(reply.to_string()),
                calls: calls.clone(),
            },
            calls,
        )
    }

    fn failing(model: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                model: model.to_string(),
                reply: None,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl FluxyDriver for ScriptedBackend {
    async fn generate(&self, _req: &GenerateRequest) -> FluxyResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(text) => Ok(GenerateResponse { text: text.clone() }),
            None => Err(HttpError::new("model overloaded").into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[tokio::test]
async fn first_success_wins_and_later_backends_stay_cold() {
    let (a, a_calls) = ScriptedBackend::failing("model-a");
    let (b, b_calls) = ScriptedBackend::succeeding("model-b", "from b");
    let (c, c_calls) = ScriptedBackend::succeeding("model-c", "from c");

    let gateway = ModelGateway::new(vec![a, b, c], Duration::ZERO);
    let text = gateway.generate_text("prompt", false).await.unwrap();

    assert_eq!(text, "from b");
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    assert_eq!(c_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn immediate_success_skips_the_entire_tail() {
    let (a, a_calls) = ScriptedBackend::succeeding("model-a", "from a");
    let (b, b_calls) = ScriptedBackend::succeeding("model-b", "from b");

    let gateway = ModelGateway::new(vec![a, b], Duration::ZERO);
    let text = gateway.generate_text("prompt", false).await.unwrap();

    assert_eq!(text, "from a");
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn exhaustion_surfaces_once_with_each_backend_tried_once() {
    let (a, a_calls) = ScriptedBackend::failing("model-a");
    let (b, b_calls) = ScriptedBackend::failing("model-b");
    let (c, c_calls) = ScriptedBackend::failing("model-c");

    let gateway = ModelGateway::new(vec![a, b, c], Duration::ZERO);
    let err = gateway.generate_text("prompt", false).await.unwrap_err();

    assert!(err.is_gateway_exhausted());
    assert!(format!("{}", err).contains("All 3 configured model backends failed"));
    // Breadth over depth: exactly one attempt per backend, no second pass.
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    assert_eq!(c_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_backend_list_is_exhausted_immediately() {
    let gateway: ModelGateway<ScriptedBackend> = ModelGateway::new(vec![], Duration::ZERO);
    let err = gateway.generate_text("prompt", false).await.unwrap_err();
    assert!(err.is_gateway_exhausted());
}

#[tokio::test]
async fn lookup_flag_rides_on_the_request() {
    struct LookupProbe {
        saw_lookup: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl FluxyDriver for LookupProbe {
        async fn generate(&self, req: &GenerateRequest) -> FluxyResult<GenerateResponse> {
            if req.enable_lookup {
                self.saw_lookup.fetch_add(1, Ordering::SeqCst);
            }
            Ok(GenerateResponse {
                text: "ok".to_string(),
            })
        }

        fn provider_name(&self) -> &'static str {
            "probe"
        }

        fn model_name(&self) -> &str {
            "probe"
        }
    }

    let saw_lookup = Arc::new(AtomicUsize::new(0));
    let gateway = ModelGateway::new(
        vec![LookupProbe {
            saw_lookup: saw_lookup.clone(),
        }],
        Duration::ZERO,
    );

    gateway.generate_text("prompt", true).await.unwrap();
    assert_eq!(saw_lookup.load(Ordering::SeqCst), 1);
}
