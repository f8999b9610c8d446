/// 文档服务 API 客户端
///
/// 封装所有与远程文档处理 / 题目生成服务相关的 HTTP 调用
use crate::config::Config;
use crate::error::{AppError, AppResult, FormatError, NetworkError};
use crate::models::{Mode, UploadedFile};
use crate::services::DocumentApi;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

const PROCESS_ENDPOINT: &str = "/api/documents/process";

/// 文档服务客户端
pub struct DocumentClient {
    http: Client,
    base_url: String,
}

impl DocumentClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(NetworkError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.api_base_url().to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// 发送请求并读取 JSON 响应
    ///
    /// 非 2xx 状态码时尽量读取响应中的 `error` 字段
    async fn send_json(&self, endpoint: &str, request: RequestBuilder) -> AppResult<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::transport(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string));

            warn!("请求 {} 返回状态 {}: {:?}", endpoint, status, message);

            return Err(NetworkError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            }
            .into());
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::transport(endpoint, e))
    }
}

#[async_trait]
impl DocumentApi for DocumentClient {
    /// 上传文件（multipart，字段名 `file`）
    async fn process(&self, file: &UploadedFile) -> AppResult<String> {
        debug!("上传文件: {} ({} 字节, {})", file.name, file.size(), file.content_type);

        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(file.content_type)
            .map_err(|e| AppError::transport(PROCESS_ENDPOINT, e))?;
        let form = Form::new().part("file", part);

        let request = self.http.post(self.url(PROCESS_ENDPOINT)).multipart(form);
        let body = self.send_json(PROCESS_ENDPOINT, request).await?;

        let asset_id = body
            .get("asset_id")
            .and_then(Value::as_str)
            .ok_or(FormatError::MissingField { field: "asset_id" })?;

        debug!("文件 {} 上传成功, asset_id: {}", file.name, asset_id);

        Ok(asset_id.to_string())
    }

    /// 请求生成题目，返回 `questions` 字段
    async fn generate(&self, asset_id: &str, mode: Mode) -> AppResult<Value> {
        let endpoint = mode.endpoint();
        debug!("请求生成题目: asset_id={}, 模式={}", asset_id, mode);

        let request = self
            .http
            .post(self.url(endpoint))
            .json(&json!({ "asset_id": asset_id }));
        let body = self.send_json(endpoint, request).await?;

        match body {
            Value::Object(mut map) => map
                .remove("questions")
                .ok_or_else(|| FormatError::MissingField { field: "questions" }.into()),
            _ => Err(FormatError::MissingField { field: "questions" }.into()),
        }
    }
}
