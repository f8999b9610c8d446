use crate::error::ConfigError;
use crate::models::Mode;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// 远程服务地址，构建时通过 `QUIZGEN_API_URL` 指定
pub const API_BASE_URL: &str = match option_env!("QUIZGEN_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_FILE: &str = "quizgen.toml";

/// 程序配置
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 待上传文档所在目录
    pub input_dir: String,
    /// 题目生成模式
    pub mode: Mode,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 单个文件大小上限（字节）
    pub max_file_size_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: "documents".to_string(),
            mode: Mode::General,
            verbose_logging: false,
            request_timeout_secs: 120,
            max_file_size_bytes: 50 * 1024 * 1024,
        }
    }
}

/// 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    input_dir: Option<String>,
    mode: Option<Mode>,
    verbose_logging: Option<bool>,
    request_timeout_secs: Option<u64>,
    max_file_size_bytes: Option<u64>,
}

impl Config {
    /// 远程服务地址（去掉末尾的 `/`）
    pub fn api_base_url(&self) -> &'static str {
        API_BASE_URL.trim_end_matches('/')
    }

    /// 按 默认值 ← 配置文件 ← 环境变量 的顺序加载
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("QUIZGEN_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let base = if Path::new(&path).exists() {
            debug!("读取配置文件: {}", path);
            Self::from_toml_file(&path)?
        } else {
            debug!("配置文件 {} 不存在，使用默认配置", path);
            Self::default()
        };
        base.apply_env()
    }

    /// 从 TOML 文件读取配置，未填写的字段使用默认值
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::FileParseFailed {
            path: path.to_string(),
            source,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: FileConfig = toml::from_str(content)?;
        let default = Self::default();
        Ok(Self {
            input_dir: file.input_dir.unwrap_or(default.input_dir),
            mode: file.mode.unwrap_or(default.mode),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
            request_timeout_secs: file.request_timeout_secs.unwrap_or(default.request_timeout_secs),
            max_file_size_bytes: file.max_file_size_bytes.unwrap_or(default.max_file_size_bytes),
        })
    }

    fn apply_env(self) -> Result<Self, ConfigError> {
        Ok(Self {
            input_dir: std::env::var("QUIZGEN_INPUT_DIR").unwrap_or(self.input_dir),
            mode: parse_env("QUIZGEN_MODE", "general | mcq | fitb")?.unwrap_or(self.mode),
            verbose_logging: parse_env("QUIZGEN_VERBOSE", "bool")?.unwrap_or(self.verbose_logging),
            request_timeout_secs: parse_env("QUIZGEN_REQUEST_TIMEOUT_SECS", "u64")?
                .unwrap_or(self.request_timeout_secs),
            max_file_size_bytes: parse_env("QUIZGEN_MAX_FILE_SIZE_BYTES", "u64")?
                .unwrap_or(self.max_file_size_bytes),
        })
    }
}

fn parse_env<T: std::str::FromStr>(
    var_name: &str,
    expected_type: &str,
) -> Result<Option<T>, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map(Some).map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            })
        }
        Err(_) => Ok(None),
    }
}
