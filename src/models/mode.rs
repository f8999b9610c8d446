use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 题目生成模式，决定用哪种语法解析返回内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// 普通问答题
    #[default]
    General,
    /// 选择题
    Mcq,
    /// 填空题
    Fitb,
}

static MODE_NAMES: phf::Map<&'static str, Mode> = phf_map! {
    "general" => Mode::General,
    "mcq" => Mode::Mcq,
    "fitb" => Mode::Fitb,
};

impl Mode {
    /// 模式名称
    pub fn name(self) -> &'static str {
        match self {
            Mode::General => "general",
            Mode::Mcq => "mcq",
            Mode::Fitb => "fitb",
        }
    }

    /// 对应的生成接口路径
    pub fn endpoint(self) -> &'static str {
        match self {
            Mode::General => "/api/documents/generate_questions",
            Mode::Mcq => "/api/documents/generate_mcq",
            Mode::Fitb => "/api/documents/generate_fitb",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 未知的模式名称
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("未知的生成模式: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MODE_NAMES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}
