//! Fetch command - Download a problem's examples and optionally run them

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;

use crate::{
    api::{slug_from_url, LeetCodeClient},
    case::{CaseFile, ProblemDetail},
    commands::print_examples,
    config::Config,
    finder::Strategy,
    test_runner::{print_summary, RunSummary, TestRunner},
};

pub struct FetchOptions {
    pub save: bool,
    pub run: bool,
    pub strategy: Option<Strategy>,
}

/// Fetch the problem behind `url_or_slug` and turn its examples into cases
pub async fn fetch_cases(
    client: &LeetCodeClient,
    url_or_slug: &str,
) -> Result<(ProblemDetail, CaseFile)> {
    let slug = slug_from_url(url_or_slug);
    let detail = client.get_problem_detail(&slug).await?;
    let cases = detail.to_case_file();
    Ok((detail, cases))
}

/// Write `cases` to `<dir>/<slug>.json`, creating `dir` if needed
pub fn save_cases(cases: &CaseFile, dir: &Path, slug: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{slug}.json"));
    cases.save(&path)?;
    Ok(path)
}

pub async fn execute(
    config: &Config,
    url_or_slug: &str,
    options: FetchOptions,
) -> Result<Option<RunSummary>> {
    let client = LeetCodeClient::new(config)?;
    let slug = slug_from_url(url_or_slug);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Fetching examples for {slug}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let fetched = fetch_cases(&client, &slug).await;
    spinner.finish_and_clear();
    let (detail, cases) = fetched?;

    if cases.test_cases.is_empty() {
        println!("{}", "No test cases found.".yellow());
        return Ok(None);
    }

    println!(
        "{}",
        format!(
            "✓ Found {} examples for {} ({})",
            cases.test_cases.len(),
            detail.title,
            detail.difficulty
        )
        .green()
    );
    println!();
    print_examples(&cases.test_cases);

    if options.save {
        let path = save_cases(&cases, &config.cases_dir(), &detail.title_slug)?;
        println!("{}", format!("✓ Cases saved to: {}", path.display()).green());
    }

    if !options.run {
        return Ok(None);
    }

    let runner = TestRunner::new(
        config.strategy_or_default(options.strategy),
        cases.test_cases,
    );
    let summary = runner.run();
    print_summary(&summary, runner.strategy());
    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    async fn mock_two_sum() -> MockServer {
        let mock_server = MockServer::start().await;

        let content = "<p>Given an array...</p>\
            <pre><strong>Input:</strong> nums = [2,7,11,15], target = 9\n<strong>Output:</strong> [0,1]</pre>\
            <pre><strong>Input:</strong> nums = [3,2,4], target = 6\n<strong>Output:</strong> [1,2]</pre>";

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "question": {
                        "questionId": "1",
                        "title": "Two Sum",
                        "titleSlug": "two-sum",
                        "content": content,
                        "difficulty": "Easy"
                    }
                }
            })))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri doesn't support TCP sockets")]
    async fn test_fetch_cases_from_url() {
        let mock_server = mock_two_sum().await;
        let client = LeetCodeClient::new_with_base_url(mock_server.uri()).unwrap();

        let (detail, cases) = fetch_cases(&client, "https://leetcode.com/problems/two-sum/")
            .await
            .unwrap();
        assert_eq!(detail.difficulty, "Easy");
        assert_eq!(cases.problem_id, "1");
        assert_eq!(cases.test_cases.len(), 2);
        assert_eq!(cases.test_cases[1].expected, "[1,2]");
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri doesn't support TCP sockets")]
    async fn test_execute_saves_and_runs() {
        let mock_server = mock_two_sum().await;
        let temp_dir = TempDir::new().unwrap();
        let cases_dir = temp_dir.path().join("cases");

        let config = Config {
            base_url: mock_server.uri(),
            cases_dir: Some(cases_dir.clone()),
            ..Default::default()
        };
        let options = FetchOptions {
            save: true,
            run: true,
            strategy: Some(Strategy::BruteForce),
        };

        let summary = execute(&config, "two-sum", options).await.unwrap().unwrap();
        assert!(summary.all_passed());

        let saved = CaseFile::load(&cases_dir.join("two-sum.json")).unwrap();
        assert_eq!(saved.test_cases.len(), 2);
    }
}
