//! The staged content pipeline.

use tracing::{info, instrument, warn};

use fluxy_core::{Article, GenerateRequest};
use fluxy_error::{FluxyResult, PipelineError, PipelineErrorKind};
use fluxy_interface::FluxyDriver;

use crate::{extract_title, prompts, scrub_meta_phrases, strip_code_fences};

/// Orchestrates staged generation: research, outline, draft, quality pass.
///
/// Each stage is a model call whose output feeds the next. Research, outline,
/// and the quality pass degrade to safe substitutes when the gateway fails;
/// the draft stage is the one essential step with no acceptable default, so
/// its failure aborts the run.
pub struct ContentPipeline<D: FluxyDriver> {
    driver: D,
    pause: std::time::Duration,
}

impl<D: FluxyDriver> ContentPipeline<D> {
    /// Create a pipeline over the given driver.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            pause: std::time::Duration::ZERO,
        }
    }

    /// Sleep this long between stages, to respect upstream rate limits.
    pub fn with_pause(mut self, pause: std::time::Duration) -> Self {
        self.pause = pause;
        self
    }

    async fn pace(&self) {
        if !self.pause.is_zero() {
            tokio::time::sleep(self.pause).await;
        }
    }

    /// Gather recent facts, figures, and reader questions for the topic.
    ///
    /// Uses live lookup. Degrades to a minimal placeholder note so the next
    /// stage never receives empty input.
    pub async fn research(&self, topic: &str) -> String {
        let req = GenerateRequest::new(prompts::research(topic)).with_lookup();
        match self.driver.generate(&req).await {
            Ok(response) => response.text,
            Err(e) => {
                warn!(error = %e, "Research failed, continuing with placeholder notes");
                format!("조사 메모 없음. '{topic}' 주제의 일반 상식 범위에서 작성할 것.")
            }
        }
    }

    /// Propose a structure with a marked title line.
    ///
    /// Degrades to a trivial one-section structure titled by the raw topic.
    pub async fn outline(&self, topic: &str, notes: &str) -> String {
        let req = GenerateRequest::new(prompts::outline(topic, notes));
        match self.driver.generate(&req).await {
            Ok(response) => response.text,
            Err(e) => {
                warn!(error = %e, "Outline failed, continuing with trivial structure");
                format!("{} {topic}\n1. 핵심 정리", prompts::TITLE_MARKER)
            }
        }
    }

    /// Write the full draft body.
    ///
    /// Stage-fatal: a missing draft aborts the run.
    pub async fn draft(&self, topic: &str, outline: &str, notes: &str) -> FluxyResult<String> {
        let req = GenerateRequest::new(prompts::draft(topic, outline, notes));
        match self.driver.generate(&req).await {
            Ok(response) => Ok(strip_code_fences(&response.text)),
            Err(e) => {
                Err(PipelineError::new(PipelineErrorKind::DraftFailed(e.to_string())).into())
            }
        }
    }

    /// Run the defensive quality pass.
    ///
    /// Revision is optional: on failure the pre-revision draft stands.
    pub async fn revise(&self, topic: &str, draft: &str) -> String {
        let req = GenerateRequest::new(prompts::revise(topic, draft));
        match self.driver.generate(&req).await {
            Ok(response) => strip_code_fences(&response.text),
            Err(e) => {
                warn!(error = %e, "Quality pass failed, keeping the original draft");
                draft.to_string()
            }
        }
    }

    /// Run the full staged sequence for a topic.
    #[instrument(skip(self))]
    pub async fn compose(&self, topic: &str) -> FluxyResult<Article> {
        info!(topic = %topic, "Researching");
        let notes = self.research(topic).await;
        self.pace().await;

        info!("Outlining");
        let outline = self.outline(topic, &notes).await;
        self.pace().await;

        info!("Drafting");
        let draft = self.draft(topic, &outline, &notes).await?;
        self.pace().await;

        info!("Revising");
        let revised = self.revise(topic, &draft).await;

        let body = scrub_meta_phrases(&revised);
        let title = extract_title(&outline, topic);

        Ok(Article { title, body })
    }
}
