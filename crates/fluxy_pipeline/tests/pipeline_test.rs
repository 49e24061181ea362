//! Tests for topic selection and the staged pipeline, with scripted drivers.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use fluxy_core::{GenerateRequest, GenerateResponse, TopicConfig, TopicStrategy};
use fluxy_error::{FluxyResult, HttpError};
use fluxy_interface::FluxyDriver;
use fluxy_pipeline::{ContentPipeline, TopicSelector};

/// Driver that replays a fixed sequence of outcomes, one per call.
///
/// Prompts are recorded into a shared buffer so tests can inspect them after
/// the driver has moved into the component under test.
struct SequenceDriver {
    script: Mutex<VecDeque<Result<String, String>>>,
    prompts_seen: Arc<Mutex<Vec<String>>>,
}

impl SequenceDriver {
    fn new(script: Vec<Result<String, String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            prompts_seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing() -> Self {
        Self::new(Vec::new())
    }

    fn prompt_log(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts_seen.clone()
    }
}

#[async_trait]
impl FluxyDriver for SequenceDriver {
    async fn generate(&self, req: &GenerateRequest) -> FluxyResult<GenerateResponse> {
        self.prompts_seen.lock().unwrap().push(req.prompt.clone());
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(GenerateResponse { text }),
            Some(Err(message)) => Err(HttpError::new(message).into()),
            None => Err(HttpError::new("script exhausted").into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "sequence"
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

fn model_topic_config() -> TopicConfig {
    TopicConfig {
        strategy: TopicStrategy::Model,
        ..TopicConfig::default()
    }
}

#[tokio::test]
async fn topic_selection_never_errors_on_gateway_failure() {
    let config = model_topic_config();
    let fallback = config.fallback.clone();
    let selector = TopicSelector::new(SequenceDriver::failing(), config);

    let topic = selector.select(&[]).await;
    assert_eq!(topic, fallback);
}

#[tokio::test]
async fn model_topic_is_cleaned_and_avoids_excluded_title() {
    let excluded = "ETF 투자 가이드".to_string();
    let driver = SequenceDriver::new(vec![Ok(
        "\"**연말정산 환급 더 받는 방법**\"\n부연 설명".to_string()
    )]);
    let selector = TopicSelector::new(driver, model_topic_config());

    let topic = selector.select(std::slice::from_ref(&excluded)).await;

    assert_eq!(topic, "연말정산 환급 더 받는 방법");
    assert_ne!(topic, excluded);
    assert!(!topic.contains(&excluded));
}

#[tokio::test]
async fn exclusion_list_is_rendered_into_the_prompt() {
    let driver = SequenceDriver::new(vec![Ok("새로운 주제".to_string())]);
    let log = driver.prompt_log();
    let selector = TopicSelector::new(driver, model_topic_config());

    selector.select(&["ETF 투자 가이드".to_string()]).await;

    let prompts = log.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("ETF 투자 가이드"));
}

#[tokio::test]
async fn static_strategy_makes_no_model_calls() {
    struct CountingDriver {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl FluxyDriver for CountingDriver {
        async fn generate(&self, _req: &GenerateRequest) -> FluxyResult<GenerateResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(GenerateResponse {
                text: "unused".to_string(),
            })
        }

        fn provider_name(&self) -> &'static str {
            "counting"
        }

        fn model_name(&self) -> &str {
            "counting"
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let config = TopicConfig {
        strategy: TopicStrategy::Static,
        curated: vec!["고정 주제".to_string()],
        ..TopicConfig::default()
    };
    let selector = TopicSelector::new(
        CountingDriver {
            calls: calls.clone(),
        },
        config,
    );

    let topic = selector.select(&[]).await;

    assert_eq!(topic, "고정 주제");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn compose_threads_stage_outputs_and_extracts_title() {
    let driver = SequenceDriver::new(vec![
        Ok("1. 최근 통계 요약".to_string()),
        Ok("제목: 스마트폰 발열 잡는 현실적인 방법\n1. 도입부\n2. 본문".to_string()),
        Ok("```html\n<h2>발열, 저도 고생했어요</h2>\n<p>본문</p>\n```".to_string()),
        Ok("물론입니다! 수정했어요.\n<h2>발열, 저도 고생했어요</h2>\n<p>더 깔끔한 본문</p>".to_string()),
    ]);
    let pipeline = ContentPipeline::new(driver);

    let article = pipeline.compose("스마트폰 발열").await.unwrap();

    assert_eq!(article.title, "스마트폰 발열 잡는 현실적인 방법");
    assert!(!article.body.contains("```"));
    assert!(!article.body.contains("물론입니다"));
    assert!(article.body.contains("더 깔끔한 본문"));
}

#[tokio::test]
async fn draft_failure_is_fatal_even_when_earlier_stages_degrade() {
    // Research and outline degrade silently; the draft call errors.
    let pipeline = ContentPipeline::new(SequenceDriver::failing());

    let err = pipeline.compose("아무 주제").await.unwrap_err();
    assert!(format!("{}", err).contains("Draft generation failed"));
}

#[tokio::test]
async fn revision_failure_keeps_the_draft() {
    let driver = SequenceDriver::new(vec![
        Ok("조사 메모".to_string()),
        Ok("제목: 집에서 커피 맛있게 내리는 방법".to_string()),
        Ok("<p>초안 본문입니다</p>".to_string()),
        Err("revision backend down".to_string()),
    ]);
    let pipeline = ContentPipeline::new(driver);

    let article = pipeline.compose("홈카페").await.unwrap();

    assert_eq!(article.title, "집에서 커피 맛있게 내리는 방법");
    assert_eq!(article.body, "<p>초안 본문입니다</p>");
}

#[tokio::test]
async fn fence_stripped_drafts_contain_no_delimiters() {
    let driver = SequenceDriver::new(vec![
        Ok("메모".to_string()),
        Ok("제목: 무선 이어폰 고르는 기준 총정리".to_string()),
        Ok("```html\n<p>본문 시작</p>\n```\n추가 설명 ``` 조각".to_string()),
        Err("skip revision".to_string()),
    ]);
    let pipeline = ContentPipeline::new(driver);

    let article = pipeline.compose("이어폰").await.unwrap();
    assert!(!article.body.contains("```"));
}
