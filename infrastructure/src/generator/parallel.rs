//! Parallel fan-out over the single-item operations.
//!
//! Issues one client call per item concurrently and aggregates whatever
//! succeeded, in completion order. A failed item contributes nothing and is
//! only logged; callers that need per-item failure visibility call the
//! client operations individually instead.

use crate::generator::client::GeneratorClient;
use quizforge_application::{McqItem, QaItem};
use quizforge_domain::ProblemPattern;
use tokio::task::JoinSet;
use tracing::warn;

/// Parameters for one item of a parallel fan-out.
#[derive(Debug, Clone)]
pub struct SingleRequestSpec {
    pub answer: String,
    pub existing_questions: Vec<String>,
    pub pattern: ProblemPattern,
}

impl SingleRequestSpec {
    pub fn new(answer: impl Into<String>, pattern: ProblemPattern) -> Self {
        Self {
            answer: answer.into(),
            existing_questions: Vec::new(),
            pattern,
        }
    }

    pub fn with_existing(mut self, existing_questions: Vec<String>) -> Self {
        self.existing_questions = existing_questions;
        self
    }
}

impl GeneratorClient {
    /// Run one single-QA generation per spec concurrently and collect the
    /// successes. No ordering guarantee beyond append-on-completion.
    pub async fn generate_single_qa_parallel(
        &self,
        specs: Vec<SingleRequestSpec>,
    ) -> Vec<QaItem> {
        let mut join_set = JoinSet::new();

        for spec in specs {
            let client = self.clone();
            join_set.spawn(async move {
                let result = client
                    .generate_single_qa(&spec.answer, &spec.existing_questions, spec.pattern)
                    .await;
                (spec.answer, result)
            });
        }

        let mut results = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((_, Ok(item))) => results.push(item),
                Ok((answer, Err(e))) => {
                    warn!(answer = %answer, error = %e, "dropping failed single-QA item");
                }
                Err(e) => warn!("task join error: {}", e),
            }
        }
        results
    }

    /// Run one single-MCQ generation per spec concurrently. Each success's
    /// array is flattened into the aggregate, so a misbehaving service can
    /// contribute zero or several items per input.
    pub async fn generate_single_mcq_parallel(
        &self,
        specs: Vec<SingleRequestSpec>,
    ) -> Vec<McqItem> {
        let mut join_set = JoinSet::new();

        for spec in specs {
            let client = self.clone();
            join_set.spawn(async move {
                let result = client
                    .generate_single_mcq(&spec.answer, &spec.existing_questions, spec.pattern)
                    .await;
                (spec.answer, result)
            });
        }

        let mut results = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((_, Ok(items))) => results.extend(items),
                Ok((answer, Err(e))) => {
                    warn!(answer = %answer, error = %e, "dropping failed single-MCQ item");
                }
                Err(e) => warn!("task join error: {}", e),
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::StubServer;
    use std::collections::HashSet;

    fn requested_answer(body: &str) -> String {
        let value: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
        value["解答"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn test_qa_fan_out_drops_failures() {
        let server = StubServer::respond_with(|body| {
            let answer = requested_answer(body);
            if answer == "fail-me" {
                (500, String::new())
            } else {
                (200, format!(r#"{{"問題文":"Q: {answer}","解説":"E"}}"#))
            }
        })
        .await;
        let client = GeneratorClient::new(&server.base_url)
            .unwrap()
            .with_retries(0);

        let results = client
            .generate_single_qa_parallel(vec![
                SingleRequestSpec::new("鎖国", ProblemPattern::OneShot),
                SingleRequestSpec::new("fail-me", ProblemPattern::OneShot),
                SingleRequestSpec::new("朱印船貿易", ProblemPattern::OneShot),
            ])
            .await;

        let questions: HashSet<String> = results.into_iter().map(|r| r.question).collect();
        let expected: HashSet<String> =
            ["Q: 鎖国", "Q: 朱印船貿易"].iter().map(|s| s.to_string()).collect();
        assert_eq!(questions, expected);
    }

    #[tokio::test]
    async fn test_qa_fan_out_empty_input() {
        let server = StubServer::scripted(vec![(200, String::new())]).await;
        let client = GeneratorClient::new(&server.base_url).unwrap();

        let results = client.generate_single_qa_parallel(vec![]).await;
        assert!(results.is_empty());
        assert_eq!(server.hits.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_mcq_fan_out_flattens_arrays() {
        let server = StubServer::respond_with(|body| {
            let answer = requested_answer(body);
            let item = |q: &str| {
                format!(r#"{{"問題文":"{q}","選択肢":["a","b","c","d"],"解説":"E"}}"#)
            };
            match answer.as_str() {
                "empty" => (200, "[]".to_string()),
                "fail-me" => (503, String::new()),
                "double" => (200, format!("[{},{}]", item("d1"), item("d2"))),
                other => (200, format!("[{}]", item(&format!("Q: {other}")))),
            }
        })
        .await;
        let client = GeneratorClient::new(&server.base_url)
            .unwrap()
            .with_retries(0);

        let results = client
            .generate_single_mcq_parallel(vec![
                SingleRequestSpec::new("大宝律令", ProblemPattern::FillInBlank),
                SingleRequestSpec::new("empty", ProblemPattern::FillInBlank),
                SingleRequestSpec::new("fail-me", ProblemPattern::FillInBlank),
                SingleRequestSpec::new("double", ProblemPattern::FillInBlank),
            ])
            .await;

        let questions: HashSet<String> = results.into_iter().map(|r| r.question).collect();
        let expected: HashSet<String> = ["Q: 大宝律令", "d1", "d2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(questions, expected);
    }
}
