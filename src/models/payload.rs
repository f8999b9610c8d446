use crate::error::FormatError;
use serde_json::Value;

/// 生成接口返回的原始 `questions` 字段
///
/// 上游服务在文本模式和结构化模式下的序列化方式不一致，
/// 所以这里只区分"字符串"和"数组"两种形态，其余形态直接拒绝
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// 模型输出的自然语言文本
    Text(String),
    /// 已经结构化的数组（字符串或记录）
    Items(Vec<Value>),
}

impl TryFrom<Value> for RawPayload {
    type Error = FormatError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(RawPayload::Text(text)),
            Value::Array(items) => Ok(RawPayload::Items(items)),
            other => Err(FormatError::UnexpectedShape {
                found: json_type_name(&other),
            }),
        }
    }
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        RawPayload::Text(text.to_string())
    }
}

/// JSON 值的类型名称（用于错误信息）
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_string_and_array() {
        assert_eq!(
            RawPayload::try_from(json!("Q1?")).unwrap(),
            RawPayload::Text("Q1?".to_string())
        );
        assert_eq!(
            RawPayload::try_from(json!(["a", 1])).unwrap(),
            RawPayload::Items(vec![json!("a"), json!(1)])
        );
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert_eq!(
            RawPayload::try_from(json!({"questions": []})),
            Err(FormatError::UnexpectedShape { found: "object" })
        );
        assert_eq!(
            RawPayload::try_from(Value::Null),
            Err(FormatError::UnexpectedShape { found: "null" })
        );
    }
}
