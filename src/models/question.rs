use serde::{Deserialize, Serialize};

/// 题目记录类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// 分节标题
    Header,
    /// 普通问答题
    Question,
    /// 选择题
    Mcq,
    /// 填空题
    Fitb,
}

/// 解析后的一条题目，用于展示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub text: String,
}

impl Question {
    pub fn new(kind: QuestionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self::new(QuestionKind::Header, text)
    }

    pub fn question(text: impl Into<String>) -> Self {
        Self::new(QuestionKind::Question, text)
    }

    pub fn is_header(&self) -> bool {
        self.kind == QuestionKind::Header
    }
}
