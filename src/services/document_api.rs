//! 远程文档服务 - 业务能力层
//!
//! 只描述"我能做什么"：上传一个文件、为一个 asset 生成题目。
//! 编排层只依赖这个 trait，不关心背后是真实的 HTTP 服务还是测试替身。

use crate::error::AppResult;
use crate::models::{Mode, UploadedFile};
use async_trait::async_trait;
use serde_json::Value;

/// 远程文档处理 / 题目生成服务
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// 上传文件并返回服务端分配的 asset_id
    async fn process(&self, file: &UploadedFile) -> AppResult<String>;

    /// 为指定 asset 生成题目，返回未解析的 `questions` 字段
    async fn generate(&self, asset_id: &str, mode: Mode) -> AppResult<Value>;
}
