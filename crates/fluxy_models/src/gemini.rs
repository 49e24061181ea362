//! Google Gemini API implementation.
//!
//! One [`GeminiClient`] wraps one model variant; the gateway holds several,
//! in priority order. The client maps the request's `enable_lookup` flag to
//! the Google Search grounding tool, so live retrieval is a per-call
//! capability rather than a separate backend.

use async_trait::async_trait;
use tracing::instrument;

use gemini_rust::{Gemini, Tool, client::Model};

use fluxy_core::{GenerateRequest, GenerateResponse};
use fluxy_error::{FluxyResult, GeminiError, GeminiErrorKind};
use fluxy_interface::FluxyDriver;

/// Client for one Gemini model variant.
///
/// The API key is supplied by the caller; this type never reads the process
/// environment. Requests may still override the model per call, in which case
/// a transient client for that model is built on the fly.
///
/// # Example
///
/// ```no_run
/// use fluxy_models::GeminiClient;
/// use fluxy_core::GenerateRequest;
/// use fluxy_interface::FluxyDriver;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new("api-key", "gemini-2.5-flash")?;
/// let response = client.generate(&GenerateRequest::new("Hello")).await?;
/// println!("{}", response.text);
/// # Ok(())
/// # }
/// ```
pub struct GeminiClient {
    client: Gemini,
    api_key: String,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new client for the given API key and model.
    #[instrument(name = "gemini_client_new", skip_all)]
    pub fn new(api_key: impl Into<String>, model_name: impl Into<String>) -> FluxyResult<Self> {
        let api_key = api_key.into();
        let model_name = model_name.into();
        let client = Self::build_client(&api_key, &model_name)?;
        Ok(Self {
            client,
            api_key,
            model_name,
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names use Model::Custom with the "models/" prefix the
    /// Gemini API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    fn build_client(api_key: &str, model_name: &str) -> FluxyResult<Gemini> {
        Gemini::with_model(api_key, Self::model_name_to_enum(model_name))
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())).into())
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured errors with HTTP
    /// status codes when available.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpStatus {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }

    async fn generate_internal(&self, req: &GenerateRequest) -> FluxyResult<GenerateResponse> {
        // A per-request model override builds a transient client; the common
        // path reuses the one constructed at startup.
        let transient;
        let (client, model_name) = match req.model.as_deref() {
            Some(model) if model != self.model_name => {
                transient = Self::build_client(&self.api_key, model)?;
                (&transient, model)
            }
            _ => (&self.client, self.model_name.as_str()),
        };

        let mut builder = client.generate_content().with_user_message(&req.prompt);

        if req.enable_lookup {
            builder = builder.with_tool(Tool::google_search());
        }
        if let Some(temp) = req.temperature {
            builder = builder.with_temperature(temp);
        }
        if let Some(max_tok) = req.max_tokens {
            builder = builder.with_max_output_tokens(max_tok as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(
                GeminiError::new(GeminiErrorKind::EmptyResponse(model_name.to_string())).into(),
            );
        }

        Ok(GenerateResponse { text })
    }
}

#[async_trait]
impl FluxyDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> FluxyResult<GenerateResponse> {
        self.generate_internal(req).await
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
