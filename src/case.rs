use std::{fs, num::ParseIntError, path::Path, sync::OnceLock};

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::finder::{FindError, Pair};

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("missing `{0}` in case input")]
    MissingField(&'static str),
    #[error("invalid number `{value}`")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("malformed case: {0}")]
    Malformed(String),
}

/// GraphQL `question` payload, trimmed to what the examples need.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProblemDetail {
    #[serde(rename = "questionId")]
    pub question_id: String,
    pub title: String,
    #[serde(rename = "titleSlug")]
    pub title_slug: String,
    pub content: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestCase {
    pub input: String,
    pub expected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// On-disk collection of cases for one problem.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CaseFile {
    #[serde(default)]
    pub problem_id: String,
    #[serde(default)]
    pub problem_title: String,
    pub test_cases: Vec<TestCase>,
}

impl CaseFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read case file {}", path.display()))?;
        let file: CaseFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse case file {}", path.display()))?;
        Ok(file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write case file {}", path.display()))?;
        tracing::info!(path = %path.display(), cases = self.test_cases.len(), "saved case file");
        Ok(())
    }
}

/// Parsed arguments of a single case: `nums = [2,7,11,15], target = 9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairInput {
    pub nums: Vec<i64>,
    pub target: i64,
}

impl PairInput {
    pub fn parse(input: &str) -> Result<Self, CaseError> {
        let mut nums = None;
        let mut target = None;

        for assignment in split_top_level(input) {
            let assignment = assignment.trim();
            if assignment.is_empty() {
                continue;
            }
            let (name, value) = assignment.split_once('=').ok_or_else(|| {
                CaseError::Malformed(format!("expected `name = value`, got `{assignment}`"))
            })?;

            match name.trim() {
                "nums" => nums = Some(parse_sequence(value)?),
                "target" => target = Some(parse_number(value)?),
                other => {
                    return Err(CaseError::Malformed(format!("unknown argument `{other}`")));
                }
            }
        }

        Ok(Self {
            nums: nums.ok_or(CaseError::MissingField("nums"))?,
            target: target.ok_or(CaseError::MissingField("target"))?,
        })
    }
}

// Split on commas that are not inside brackets
fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

fn parse_number(value: &str) -> Result<i64, CaseError> {
    let value = value.trim();
    value.parse().map_err(|source| CaseError::InvalidNumber {
        value: value.to_string(),
        source,
    })
}

/// Parse `[2,7,11,15]`, `2,7,11,15`, `[]` or an empty string.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, CaseError> {
    let text = text.trim();
    let inner = match (text.strip_prefix('['), text.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => text,
        _ => return Err(CaseError::Malformed(format!("unbalanced brackets in `{text}`"))),
    };

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner.split(',').map(parse_number).collect()
}

/// Parse an expected output. `[]` and the not-found message mean no pair.
///
/// The two indices may come in either order and are reported earlier first.
pub fn parse_expected(text: &str) -> Result<Option<Pair>, CaseError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case(&FindError::NotFound.to_string()) {
        return Ok(None);
    }

    let text = strip_prefix_ignore_case(text, "Indices:").unwrap_or(text);
    let values = parse_sequence(text)?;
    match values.as_slice() {
        [] => Ok(None),
        &[first, second] => {
            let index = |v: i64| {
                usize::try_from(v).map_err(|_| CaseError::Malformed(format!("negative index {v}")))
            };
            let (first, second) = (index(first)?, index(second)?);
            if first == second {
                return Err(CaseError::Malformed(format!(
                    "expected two distinct indices, got {first} twice"
                )));
            }
            Ok(Some(Pair::new(first.min(second), first.max(second))))
        }
        _ => Err(CaseError::Malformed(format!(
            "expected two indices, got {}",
            values.len()
        ))),
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}

/// Pull `Input:`/`Output:` examples out of a problem's HTML description.
///
/// Both the older `<pre>` layout and the newer `div.example-block` layout are
/// recognised. Blocks missing either marker are skipped.
pub fn extract_examples(html: &str) -> Vec<TestCase> {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = SELECTOR.get_or_init(|| {
        Selector::parse("pre, div.example-block").expect("example selector is valid CSS")
    });
    let document = Html::parse_fragment(html);

    let mut cases = Vec::new();
    for block in document.select(selector) {
        let text: String = block.text().collect();
        match parse_example_text(&text) {
            Some(case) => cases.push(case),
            None => tracing::warn!("skipping example block without Input/Output markers"),
        }
    }

    cases
}

fn parse_example_text(text: &str) -> Option<TestCase> {
    let (_, rest) = text.split_once("Input:")?;
    let (input, rest) = rest.split_once("Output:")?;
    let (expected, explanation) = match rest.split_once("Explanation:") {
        Some((expected, explanation)) => (expected, Some(explanation.trim().to_string())),
        None => (rest, None),
    };

    Some(TestCase {
        input: input.trim().to_string(),
        expected: expected.trim().to_string(),
        explanation: explanation.filter(|e| !e.is_empty()),
    })
}

impl ProblemDetail {
    pub fn examples(&self) -> Vec<TestCase> {
        extract_examples(&self.content)
    }

    pub fn to_case_file(&self) -> CaseFile {
        CaseFile {
            problem_id: self.question_id.clone(),
            problem_title: self.title.clone(),
            test_cases: self.examples(),
        }
    }
}
