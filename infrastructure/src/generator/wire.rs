//! Wire types and codec for the generation service.
//!
//! Request bodies use the service's Japanese field names via serde renames.
//! The names are contractual: the answer key and the existing-questions key
//! collide with the response's question key on purpose (that is the
//! service's schema, not ours to fix). `pattern` stays as-is.
//!
//! Encoding is deterministic (declared field order) and, as serde_json
//! always does, leaves forward slashes unescaped.

use quizforge_application::GenerationError;
use quizforge_domain::ProblemPattern;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Body for the single-item operations: one answer, prompts already
/// generated for it (order preserved), and the problem pattern.
#[derive(Debug, Clone, Serialize)]
pub struct SingleGenerationRequest<'a> {
    #[serde(rename = "解答")]
    pub answer: &'a str,
    #[serde(rename = "問題文")]
    pub existing_questions: &'a [String],
    pub pattern: ProblemPattern,
}

/// Body for the batch operations: answers in positional order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchGenerationRequest<'a> {
    #[serde(rename = "解答")]
    pub answers: &'a [String],
    pub pattern: ProblemPattern,
}

/// Encode a request body, tagging failures as [`GenerationError::Encoding`].
pub fn encode<T: Serialize>(body: &T) -> Result<Vec<u8>, GenerationError> {
    serde_json::to_vec(body).map_err(GenerationError::Encoding)
}

/// Decode a response body, tagging any schema mismatch as
/// [`GenerationError::Decoding`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GenerationError> {
    serde_json::from_slice(bytes).map_err(GenerationError::Decoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizforge_application::{McqItem, QaItem};

    #[test]
    fn test_single_request_wire_shape() {
        let existing = vec!["既出の問題文".to_string()];
        let request = SingleGenerationRequest {
            answer: "遣唐使",
            existing_questions: &existing,
            pattern: ProblemPattern::OneShot,
        };
        let encoded = String::from_utf8(encode(&request).unwrap()).unwrap();
        assert_eq!(
            encoded,
            r#"{"解答":"遣唐使","問題文":["既出の問題文"],"pattern":"1問1答"}"#
        );
    }

    #[test]
    fn test_single_request_empty_existing() {
        let request = SingleGenerationRequest {
            answer: "鎖国",
            existing_questions: &[],
            pattern: ProblemPattern::FillInBlank,
        };
        let encoded = String::from_utf8(encode(&request).unwrap()).unwrap();
        assert_eq!(encoded, r#"{"解答":"鎖国","問題文":[],"pattern":"穴埋め"}"#);
    }

    #[test]
    fn test_batch_request_wire_shape() {
        let answers = vec!["光合成".to_string(), "関ヶ原の戦い".to_string()];
        let request = BatchGenerationRequest {
            answers: &answers,
            pattern: ProblemPattern::OneShot,
        };
        let encoded = String::from_utf8(encode(&request).unwrap()).unwrap();
        assert_eq!(
            encoded,
            r#"{"解答":["光合成","関ヶ原の戦い"],"pattern":"1問1答"}"#
        );
    }

    #[test]
    fn test_forward_slashes_left_unescaped() {
        let request = SingleGenerationRequest {
            answer: "a/b",
            existing_questions: &[],
            pattern: ProblemPattern::OneShot,
        };
        let encoded = String::from_utf8(encode(&request).unwrap()).unwrap();
        assert!(encoded.contains("a/b"));
        assert!(!encoded.contains(r"a\/b"));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let request = BatchGenerationRequest {
            answers: &[],
            pattern: ProblemPattern::OneShot,
        };
        assert_eq!(encode(&request).unwrap(), encode(&request).unwrap());
    }

    #[test]
    fn test_decode_qa_item() {
        let bytes = r#"{"問題文":"日本一高い山は？","解説":"標高3776m。"}"#.as_bytes();
        let item: QaItem = decode(bytes).unwrap();
        assert_eq!(item.question, "日本一高い山は？");
        assert_eq!(item.explanation, "標高3776m。");
    }

    #[test]
    fn test_decode_mcq_array() {
        let bytes = r#"[{"問題文":"q","選択肢":["a","b","c","d"],"解説":"e"}]"#.as_bytes();
        let items: Vec<McqItem> = decode(bytes).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].choices, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_decode_missing_key_is_decoding_error() {
        let bytes = r#"{"問題文":"q"}"#.as_bytes();
        let result = decode::<QaItem>(bytes);
        assert!(matches!(result, Err(GenerationError::Decoding(_))));
    }

    #[test]
    fn test_decode_wrong_type_is_decoding_error() {
        let bytes = r#"{"問題文":42,"解説":"e"}"#.as_bytes();
        let result = decode::<QaItem>(bytes);
        assert!(matches!(result, Err(GenerationError::Decoding(_))));
    }

    #[test]
    fn test_response_roundtrip() {
        let item = QaItem {
            question: "日本一高い山は？".to_string(),
            explanation: "標高3776m。".to_string(),
        };
        let encoded = encode(&item).unwrap();
        let decoded: QaItem = decode(&encoded).unwrap();
        assert_eq!(decoded, item);
    }
}
