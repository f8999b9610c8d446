use thiserror::Error;

/// 上传失败时展示给用户的通用提示
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload files. Please try again.";
/// 生成题目失败时展示给用户的通用提示
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate questions. Please try again.";

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 网络请求错误
    #[error("网络错误: {0}")]
    Network(#[from] NetworkError),
    /// 生成题目时文件缺少 asset_id
    #[error("Missing asset_id for file: {file_name}")]
    MissingAsset { file_name: String },
    /// 返回内容格式错误
    #[error("格式错误: {0}")]
    Format(#[from] FormatError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 网络请求错误
#[derive(Debug, Error)]
pub enum NetworkError {
    /// 请求发送失败（连接、超时、读取响应体等）
    #[error("请求失败 ({endpoint}): {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务端返回非 2xx 状态码
    #[error("服务端返回错误状态 ({endpoint}): {status}, message={message:?}")]
    Status {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },
    /// 客户端构建失败
    #[error("HTTP 客户端初始化失败: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// 返回内容与当前模式的语法不匹配
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// 既不是字符串也不是数组
    #[error("题目数据既不是字符串也不是数组: {found}")]
    UnexpectedShape { found: &'static str },
    /// 数组元素与模式要求的结构不符
    #[error("第 {index} 个元素不符合 {mode} 模式的结构: {reason}")]
    InvalidItem {
        mode: &'static str,
        index: usize,
        reason: String,
    },
    /// 响应中缺少必需字段
    #[error("响应缺少字段 `{field}`")]
    MissingField { field: &'static str },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    FileParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// 创建请求失败错误
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Network(NetworkError::Transport {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 服务端给出的具体错误信息（如果有）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Network(NetworkError::Status {
                message: Some(message),
                ..
            }) => Some(message.as_str()),
            _ => None,
        }
    }

    /// 转换为展示给用户的提示
    ///
    /// 服务端返回了具体信息时原样展示，否则使用 `fallback` 通用提示
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = AppError::Network(NetworkError::Status {
            endpoint: "/api/documents/generate_mcq".to_string(),
            status: 400,
            message: Some("asset_id is required".to_string()),
        });
        assert_eq!(err.user_message(GENERATE_FAILED_MESSAGE), "asset_id is required");
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        let err = AppError::MissingAsset {
            file_name: "notes.pdf".to_string(),
        };
        assert_eq!(err.user_message(GENERATE_FAILED_MESSAGE), GENERATE_FAILED_MESSAGE);

        let err = AppError::Format(FormatError::UnexpectedShape { found: "object" });
        assert_eq!(err.user_message(UPLOAD_FAILED_MESSAGE), UPLOAD_FAILED_MESSAGE);
    }
}
