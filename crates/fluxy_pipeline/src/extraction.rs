//! Post-processing for model responses.
//!
//! Model output arrives with markdown wrappers, stray quoting, and the
//! occasional editor-voice aside. This module centralizes the string
//! policies that clean it up, so each rule is enumerated and testable
//! instead of scattered inline.

use regex::Regex;
use std::sync::LazyLock;

use crate::prompts::TITLE_MARKER;

/// Exclusive bounds on a plausible human-written title, in characters.
const TITLE_MIN_CHARS: usize = 5;
const TITLE_MAX_CHARS: usize = 100;

/// Normalize a raw topic suggestion into a single clean line.
///
/// Keeps the first non-empty line, strips quote characters, and collapses
/// emphasis markup.
///
/// # Examples
///
/// ```
/// use fluxy_pipeline::clean_topic;
///
/// let cleaned = clean_topic("\"**아이폰 배터리 아끼는 법**\"\n(추천 주제입니다)");
/// assert_eq!(cleaned, "아이폰 배터리 아끼는 법");
/// ```
pub fn clean_topic(raw: &str) -> String {
    let line = raw
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");

    let without_quotes: String = line
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '`' | '“' | '”'))
        .collect();

    without_quotes
        .replace("**", "")
        .replace("__", "")
        .trim_matches('*')
        .trim()
        .to_string()
}

/// Pull a title out of an outline, falling back to the topic.
///
/// Scans for a line carrying the title marker or a markdown heading. The
/// candidate is accepted only when its trimmed length sits strictly between
/// the plausible-title bounds; otherwise the original topic is returned
/// unchanged, which makes the extraction idempotent.
pub fn extract_title(outline: &str, topic: &str) -> String {
    for line in outline.lines() {
        let trimmed = line.trim();

        let candidate = if let Some(rest) = trimmed.strip_prefix(TITLE_MARKER) {
            rest.trim()
        } else if trimmed.starts_with('#') {
            trimmed.trim_start_matches('#').trim()
        } else {
            continue;
        };

        let chars = candidate.chars().count();
        if chars > TITLE_MIN_CHARS && chars < TITLE_MAX_CHARS {
            return candidate.to_string();
        }
    }

    topic.to_string()
}

/// Remove code-fence wrappers from a generated body.
///
/// Models like to hand back HTML wrapped in ```html fences. Delimiter lines
/// are dropped and any stray fence substrings erased, so the stored body
/// never contains a literal fence.
pub fn strip_code_fences(body: &str) -> String {
    let kept: Vec<&str> = body
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect();

    kept.join("\n").replace("```", "").trim().to_string()
}

/// What to do with a line that matches a meta-phrase pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhraseAction {
    /// Remove the whole line
    DropLine,
    /// Erase only the matched fragment
    Erase,
}

/// Enumerated patterns of editor-voice leakage, with their actions.
const META_PHRASE_RULES: &[(&str, PhraseAction)] = &[
    (r"^(물론입니다|네,? 알겠습니다|알겠습니다)", PhraseAction::DropLine),
    (r"요청하신.*(글|포스팅|초안|본문)", PhraseAction::DropLine),
    (r"^다음은 .*입니다[.:]?\s*$", PhraseAction::DropLine),
    (r"(?i)^as an ai", PhraseAction::DropLine),
    (r"\(수정(된|을 마친) (본문|초안)입니다\.?\)", PhraseAction::Erase),
];

static COMPILED_RULES: LazyLock<Vec<(Regex, PhraseAction)>> = LazyLock::new(|| {
    META_PHRASE_RULES
        .iter()
        .map(|(pattern, action)| (Regex::new(pattern).expect("valid meta-phrase pattern"), *action))
        .collect()
});

/// Strip residual self-referential editor language from a body.
///
/// Applied defensively after the quality pass; the prompt already forbids
/// these phrases, this removes whatever slips through anyway.
pub fn scrub_meta_phrases(text: &str) -> String {
    let mut kept = Vec::new();

    'lines: for line in text.lines() {
        let mut current = line.to_string();
        for (pattern, action) in COMPILED_RULES.iter() {
            match action {
                PhraseAction::DropLine => {
                    if pattern.is_match(current.trim()) {
                        continue 'lines;
                    }
                }
                PhraseAction::Erase => {
                    current = pattern.replace_all(&current, "").into_owned();
                }
            }
        }
        kept.push(current);
    }

    kept.join("\n").trim().to_string()
}
