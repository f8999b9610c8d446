//! 题目解析器
//!
//! 把生成接口返回的 `questions` 字段按当前模式解析为有序的题目列表。
//! 解析是纯函数：同样的 (payload, mode) 总是得到同样的结果。
//!
//! - `general` - 普通问答题，`**` 标记的行视为分节标题
//! - `mcq` - 选择题，按 `**Question <n>**` 分块
//! - `fitb` - 填空题，按 `1. ` 这样的列表编号分块

pub mod fitb;
pub mod general;
pub mod mcq;

use crate::error::FormatError;
use crate::models::{Mode, Question, RawPayload};
use serde_json::Value;
use tracing::debug;

/// 按模式解析原始内容
///
/// 内容为空的记录会被丢弃，其余记录保持解析顺序
pub fn parse(raw: &RawPayload, mode: Mode) -> Result<Vec<Question>, FormatError> {
    let mut questions = match mode {
        Mode::General => general::parse(raw)?,
        Mode::Mcq => mcq::parse(raw)?,
        Mode::Fitb => fitb::parse(raw)?,
    };

    let before = questions.len();
    questions.retain(|q| !q.text.is_empty());
    if questions.len() != before {
        debug!("丢弃了 {} 条空题目 (模式: {})", before - questions.len(), mode);
    }

    Ok(questions)
}

/// 直接解析接口返回的 JSON 值
pub fn parse_value(raw: Value, mode: Mode) -> Result<Vec<Question>, FormatError> {
    let payload = RawPayload::try_from(raw)?;
    parse(&payload, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;
    use serde_json::json;

    #[test]
    fn test_object_payload_is_rejected_in_every_mode() {
        for mode in [Mode::General, Mode::Mcq, Mode::Fitb] {
            let result = parse_value(json!({"text": "Q1?"}), mode);
            assert_eq!(
                result,
                Err(FormatError::UnexpectedShape { found: "object" }),
                "mode {}",
                mode
            );
        }
    }

    #[test]
    fn test_empty_records_are_filtered() {
        let questions = parse_value(json!(["", "   ", "Q1?"]), Mode::General).unwrap();
        assert_eq!(questions, vec![Question::question("Q1?")]);
    }

    #[test]
    fn test_empty_mcq_records_are_filtered() {
        let questions = parse_value(
            json!([{"type": "mcq", "text": ""}, {"type": "mcq", "text": "Pick one"}]),
            Mode::Mcq,
        )
        .unwrap();
        assert_eq!(questions, vec![Question::new(QuestionKind::Mcq, "Pick one")]);
    }
}
