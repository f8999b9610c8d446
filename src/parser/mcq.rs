//! 选择题解析
//!
//! 模型输出的大致格式：
//!
//! ```text
//! **Question 1**
//! What is 2+2?
//! A) 3
//! B) 4
//! C) 5
//! D) 6
//! Answer: B
//! ```

use crate::error::FormatError;
use crate::models::payload::json_type_name;
use crate::models::{Mode, Question, QuestionKind, RawPayload};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

const PREAMBLE: &str = "Here are the multiple-choice questions based on the provided text:\n\n";

static QUESTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Question [0-9]+\*\*").expect("题号正则无效"));
static OPTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-D]\)").expect("选项正则无效"));
static ANSWER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Answer:\s*").expect("答案正则无效"));

pub fn parse(raw: &RawPayload) -> Result<Vec<Question>, FormatError> {
    match raw {
        RawPayload::Text(text) => Ok(parse_text(text)),
        RawPayload::Items(items) => {
            let records = items
                .iter()
                .enumerate()
                .map(|(index, item)| structured_item(index, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(records.into_iter().flatten().collect())
        }
    }
}

fn parse_text(text: &str) -> Vec<Question> {
    let body = text.replacen(PREAMBLE, "", 1);

    QUESTION_MARKER
        .split(&body)
        .filter(|block| !block.trim().is_empty())
        .enumerate()
        .map(|(index, block)| {
            let block = if index == 0 {
                block.strip_prefix('\n').unwrap_or(block)
            } else {
                block
            };
            parse_block(block)
        })
        .collect()
}

/// 解析单个题块
///
/// 没有任何选项行时整个题块都作为题干，选项为空，照常输出
fn parse_block(block: &str) -> Question {
    let lines: Vec<&str> = block.lines().filter(|line| !line.trim().is_empty()).collect();

    let stem_end = lines
        .iter()
        .position(|line| is_option(line))
        .unwrap_or(lines.len());
    let stem = lines[..stem_end].join("\n");

    let options: Vec<&str> = lines.iter().copied().filter(|line| is_option(line)).collect();

    let answer = lines
        .iter()
        .find(|line| line.to_lowercase().contains("answer:"))
        .map(|line| ANSWER_PREFIX.replace(line, "").trim().to_string())
        .unwrap_or_default();

    Question::new(
        QuestionKind::Mcq,
        format!(
            "{}\n\n{}\n\nCorrect Answer: {}",
            stem,
            options.join("\n"),
            answer
        ),
    )
}

fn is_option(line: &str) -> bool {
    OPTION_LINE.is_match(line.trim())
}

/// 结构化返回中的单条记录，字段缺失时由上层过滤
#[derive(Debug, Deserialize)]
struct McqRecord {
    #[serde(rename = "type", default)]
    kind: Option<QuestionKind>,
    #[serde(default)]
    text: Option<String>,
}

/// 数组形式视为已经结构化的数据，原样透传
///
/// `null` 和没有 `text` 的记录返回 `None`，不会让整批失败
fn structured_item(index: usize, item: &Value) -> Result<Option<Question>, FormatError> {
    let invalid = |reason: String| FormatError::InvalidItem {
        mode: Mode::Mcq.name(),
        index,
        reason,
    };

    match item {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(Question::new(QuestionKind::Mcq, text.as_str()))),
        Value::Object(_) => {
            let record = McqRecord::deserialize(item).map_err(|e| invalid(e.to_string()))?;
            Ok(record
                .text
                .filter(|text| !text.is_empty())
                .map(|text| Question::new(record.kind.unwrap_or(QuestionKind::Mcq), text)))
        }
        other => Err(invalid(format!(
            "期望字符串或题目记录，实际为 {}",
            json_type_name(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: &str = "Here are the multiple-choice questions based on the provided text:\n\n\
**Question 1**\nWhat is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6\nAnswer: B\n\
**Question 2**\nWhich planet is red?\n\nA) Venus\nB) Mars\nC) Earth\nD) Jupiter\n\nanswer: B) Mars\n";

    #[test]
    fn test_parse_text_blocks() {
        let questions = parse(&RawPayload::from(SAMPLE)).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].kind, QuestionKind::Mcq);
        assert_eq!(
            questions[0].text,
            "What is 2+2?\n\nA) 3\nB) 4\nC) 5\nD) 6\n\nCorrect Answer: B"
        );
        assert_eq!(
            questions[1].text,
            "Which planet is red?\n\nA) Venus\nB) Mars\nC) Earth\nD) Jupiter\n\nCorrect Answer: B) Mars"
        );
    }

    #[test]
    fn test_multi_line_stem_and_indented_options() {
        let raw = RawPayload::from(
            "**Question 12**\nRead the passage.\nWhat follows?\n  A) x\n  B) y\nAnswer:C",
        );
        let questions = parse(&raw).unwrap();
        assert_eq!(
            questions[0].text,
            "Read the passage.\nWhat follows?\n\n  A) x\n  B) y\n\nCorrect Answer: C"
        );
    }

    #[test]
    fn test_block_without_options_keeps_whole_block_as_stem() {
        // 没有选项行时不做特殊处理，整块作为题干输出
        let raw = RawPayload::from("**Question 1**\nJust some prose.\nMore prose.");
        let questions = parse(&raw).unwrap();
        assert_eq!(
            questions,
            vec![Question::new(
                QuestionKind::Mcq,
                "Just some prose.\nMore prose.\n\n\n\nCorrect Answer: "
            )]
        );
    }

    #[test]
    fn test_answer_line_without_prefix_is_kept_verbatim() {
        let raw = RawPayload::from("**Question 1**\nQ?\nA) 1\nB) 2\nCorrect answer: A");
        let questions = parse(&raw).unwrap();
        assert!(questions[0].text.ends_with("Correct Answer: Correct answer: A"));
    }

    #[test]
    fn test_options_beyond_d_are_not_options() {
        let raw = RawPayload::from("**Question 1**\nQ?\nA) 1\nE) 5\nAnswer: A");
        let questions = parse(&raw).unwrap();
        assert_eq!(questions[0].text, "Q?\n\nA) 1\n\nCorrect Answer: A");
    }

    #[test]
    fn test_structured_items_pass_through() {
        let raw = RawPayload::Items(vec![
            json!({"type": "mcq", "text": "Pick one\n\nA) x"}),
            json!("Already formatted"),
        ]);
        assert_eq!(
            parse(&raw).unwrap(),
            vec![
                Question::new(QuestionKind::Mcq, "Pick one\n\nA) x"),
                Question::new(QuestionKind::Mcq, "Already formatted"),
            ]
        );
    }

    #[test]
    fn test_malformed_structured_item() {
        let raw = RawPayload::Items(vec![json!("ok"), json!(7)]);
        match parse(&raw) {
            Err(FormatError::InvalidItem { mode, index, .. }) => {
                assert_eq!(mode, "mcq");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let raw = RawPayload::Items(vec![json!({"type": "essay", "text": "Q?"})]);
        assert!(parse(&raw).is_err());

        let raw = RawPayload::Items(vec![json!({"type": "mcq", "text": 3})]);
        assert!(parse(&raw).is_err());
    }

    #[test]
    fn test_null_and_textless_records_are_skipped() {
        let raw = RawPayload::Items(vec![
            json!(null),
            json!({"type": "mcq"}),
            json!({"type": "mcq", "text": null}),
            json!({"question": "no text"}),
            json!({"type": "mcq", "text": "x"}),
        ]);
        assert_eq!(parse(&raw).unwrap(), vec![Question::new(QuestionKind::Mcq, "x")]);
    }

    #[test]
    fn test_question_marker_requires_ascii_digits() {
        // 非 ASCII 数字不算题号
        let raw =
            RawPayload::from("**Question 1**\nQ?\nA) a\n**Question ١٢**\nB) b\nAnswer: A");
        let questions = parse(&raw).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Q?\n\nA) a\nB) b\n\nCorrect Answer: A");
    }
}
