use std::collections::HashMap;

use anyhow::{anyhow, Result};
use reqwest::{header, Client};
use serde::Serialize;

use crate::{case::ProblemDetail, config::Config};

/// Client for fetching problem descriptions from LeetCode's GraphQL endpoint.
///
/// # Example
///
/// ```ignore
/// let client = LeetCodeClient::new(&Config::load()?)?;
/// let detail = client.get_problem_detail("two-sum").await?;
/// let cases = detail.examples();
/// ```
#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GraphQLQuery {
    query: String,
    variables: HashMap<String, serde_json::Value>,
}

const QUESTION_QUERY: &str = r#"
    query getQuestionDetail($titleSlug: String!) {
        question(titleSlug: $titleSlug) {
            questionId
            title
            titleSlug
            content
            difficulty
        }
    }
"#;

impl LeetCodeClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::new_with_base_url(config.base_url.clone())
    }

    pub fn new_with_base_url(base_url: String) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            ),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::REFERER,
            header::HeaderValue::from_static("https://leetcode.com/"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the description and examples of a problem by its slug.
    pub async fn get_problem_detail(&self, slug: &str) -> Result<ProblemDetail> {
        let query = GraphQLQuery {
            query: QUESTION_QUERY.to_string(),
            variables: {
                let mut map = HashMap::new();
                map.insert("titleSlug".to_string(), serde_json::json!(slug));
                map
            },
        };

        let url = format!("{}/graphql", self.base_url);
        tracing::debug!(%url, slug, "fetching problem detail");
        let response = self.client.post(&url).json(&query).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to fetch problem detail: {}",
                response.status()
            ));
        }

        let result: serde_json::Value = response.json().await?;

        let question = result
            .get("data")
            .and_then(|d| d.get("question"))
            .filter(|q| !q.is_null())
            .ok_or_else(|| anyhow!("Invalid response format"))?;

        let detail: ProblemDetail = serde_json::from_value(question.clone())?;
        Ok(detail)
    }
}

/// Extract the problem slug from a URL such as
/// `https://leetcode.com/problems/two-sum/`. A bare slug is returned as is.
pub fn slug_from_url(url: &str) -> String {
    let path = url.split(|c: char| c == '?' || c == '#').next().unwrap_or(url);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.iter().position(|s| *s == "problems") {
        Some(i) if i + 1 < segments.len() => segments[i + 1].to_string(),
        _ => segments.last().copied().unwrap_or(url).to_string(),
    }
}
