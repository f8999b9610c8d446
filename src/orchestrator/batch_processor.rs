//! 批量处理器 - 编排层
//!
//! 一次用户操作中的所有文件并发发出请求，全部成功才算成功：
//! 第一个失败的请求决定整批的结果，其余请求的结果即使成功也被丢弃。
//! 所有请求在同一个任务里被轮询，不会 spawn 新任务。

use crate::error::{AppError, AppResult};
use crate::models::{Mode, UploadedFile};
use crate::parser;
use crate::services::DocumentApi;
use crate::utils::truncate_text;
use futures::future::try_join_all;
use tracing::{debug, info};

/// 批量上传文件
///
/// # 返回
/// 成功时返回带 asset_id 的文件（顺序与输入一致）；
/// 任意一个上传失败时返回该错误，本批文件全部丢弃
pub async fn upload_batch<A>(api: &A, files: Vec<UploadedFile>) -> AppResult<Vec<UploadedFile>>
where
    A: DocumentApi + ?Sized,
{
    let uploads = files.into_iter().map(|file| async move {
        let asset_id = api.process(&file).await?;
        info!("✓ {} 上传成功 (asset_id: {})", file.name, asset_id);
        Ok::<_, AppError>(file.with_asset_id(asset_id))
    });

    try_join_all(uploads).await
}

/// 批量生成题目
///
/// 每个文件都必须已有 asset_id。返回的是整个替换用的文件列表，
/// 每个文件带上按 `mode` 解析后的题目
pub async fn generate_batch<A>(
    api: &A,
    files: &[UploadedFile],
    mode: Mode,
) -> AppResult<Vec<UploadedFile>>
where
    A: DocumentApi + ?Sized,
{
    let tasks = files.iter().map(|file| async move {
        let asset_id = file
            .asset_id
            .as_deref()
            .ok_or_else(|| AppError::MissingAsset {
                file_name: file.name.clone(),
            })?;

        let raw = api.generate(asset_id, mode).await?;
        debug!("{} 原始返回: {}", file.name, truncate_text(&raw.to_string(), 200));

        let questions = parser::parse_value(raw, mode)?;
        info!("✓ {} 生成 {} 道题目", file.name, questions.len());

        Ok::<_, AppError>(file.clone().with_questions(questions))
    });

    try_join_all(tasks).await
}
