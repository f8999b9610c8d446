//! 填空题解析

use crate::error::FormatError;
use crate::models::{Mode, Question, QuestionKind, RawPayload};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

const PREAMBLE: &str = "Here are the fill-in-the-blank questions based on the text:\n\n";
const ANSWER_MARKER: &str = "(Answer:";

static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+\. ").expect("编号正则无效"));

/// 结构化返回中的单条填空题
#[derive(Debug, Deserialize)]
struct FitbItem {
    sentence: String,
    answer: String,
}

pub fn parse(raw: &RawPayload) -> Result<Vec<Question>, FormatError> {
    match raw {
        RawPayload::Text(text) => Ok(parse_text(text)),
        RawPayload::Items(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let item = FitbItem::deserialize(item).map_err(|e| FormatError::InvalidItem {
                    mode: Mode::Fitb.name(),
                    index,
                    reason: e.to_string(),
                })?;
                // 结构化路径只用一个换行
                Ok(Question::new(
                    QuestionKind::Fitb,
                    format!("{}\nAnswer: {}", item.sentence, item.answer),
                ))
            })
            .collect(),
    }
}

fn parse_text(text: &str) -> Vec<Question> {
    let body = text.replacen(PREAMBLE, "", 1);

    LIST_MARKER
        .split(&body)
        .filter(|block| !block.trim().is_empty())
        .filter_map(parse_block)
        .collect()
}

/// 题干或答案缺失的题块直接丢弃
fn parse_block(block: &str) -> Option<Question> {
    let lines: Vec<&str> = block.lines().filter(|line| !line.trim().is_empty()).collect();

    let sentence = lines
        .iter()
        .find(|line| line.contains('_'))
        .map(|line| sentence_of(line))
        .unwrap_or_default();

    let answer = lines
        .iter()
        .find_map(|line| line.split_once(ANSWER_MARKER))
        .map(|(_, rest)| answer_of(rest))
        .unwrap_or_default();

    if sentence.is_empty() || answer.is_empty() {
        return None;
    }

    Some(Question::new(
        QuestionKind::Fitb,
        format!("{}\n\nAnswer: {}", sentence, answer),
    ))
}

/// 答案和题干在同一行时，只取 `(Answer:` 之前的部分
fn sentence_of(line: &str) -> &str {
    match line.split_once(ANSWER_MARKER) {
        Some((sentence, _)) => sentence.trim(),
        None => line.trim(),
    }
}

fn answer_of(rest: &str) -> &str {
    let rest = rest.trim();
    rest.strip_suffix(')').unwrap_or(rest).trim()
}
