//! 普通问答题解析

use crate::error::FormatError;
use crate::models::{Question, RawPayload};
use serde_json::Value;

/// 分节标题标记
const HEADER_MARKER: &str = "**";

pub fn parse(raw: &RawPayload) -> Result<Vec<Question>, FormatError> {
    let questions = match raw {
        RawPayload::Text(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(classify)
            .collect(),
        RawPayload::Items(items) => items
            .iter()
            .map(|item| match item {
                Value::String(line) => classify(line),
                // 非字符串元素只转成展示文本，不识别标题
                other => Question::question(other.to_string().trim()),
            })
            .collect(),
    };

    Ok(questions)
}

/// 含 `**` 的行去掉所有标记后作为标题，其余作为普通题目
fn classify(line: &str) -> Question {
    if line.contains(HEADER_MARKER) {
        Question::header(line.replace(HEADER_MARKER, "").trim())
    } else {
        Question::question(line.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_lines_with_headers() {
        let raw = RawPayload::from("Intro\n**Section A**\nWhat is X?\n\n");
        assert_eq!(
            parse(&raw).unwrap(),
            vec![
                Question::question("Intro"),
                Question::header("Section A"),
                Question::question("What is X?"),
            ]
        );
    }

    #[test]
    fn test_text_lines_are_trimmed() {
        let raw = RawPayload::from("  What is X?  \r\n\t\r\n  Why Y?");
        assert_eq!(
            parse(&raw).unwrap(),
            vec![Question::question("What is X?"), Question::question("Why Y?")]
        );
    }

    #[test]
    fn test_items_strip_every_marker() {
        let raw = RawPayload::Items(vec![json!("**Topic** **One**"), json!("  Q1?  ")]);
        assert_eq!(
            parse(&raw).unwrap(),
            vec![Question::header("Topic One"), Question::question("Q1?")]
        );
    }

    #[test]
    fn test_non_string_items_become_questions() {
        let raw = RawPayload::Items(vec![json!(42), json!(true), json!({"q": "**x**"})]);
        assert_eq!(
            parse(&raw).unwrap(),
            vec![
                Question::question("42"),
                Question::question("true"),
                Question::question(r#"{"q":"**x**"}"#),
            ]
        );
    }
}
