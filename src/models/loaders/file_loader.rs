use crate::error::{AppResult, FileError};
use crate::infrastructure::PreviewRegistry;
use crate::models::UploadedFile;
use std::path::{Path, PathBuf};
use tokio::fs;

fn read_failed(path: &Path) -> impl FnOnce(std::io::Error) -> FileError + '_ {
    move |source| FileError::ReadFailed {
        path: path.display().to_string(),
        source,
    }
}

/// 读取单个文件为 UploadedFile
pub async fn load_file(path: &Path, previews: &PreviewRegistry) -> AppResult<UploadedFile> {
    let bytes = fs::read(path).await.map_err(read_failed(path))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(UploadedFile::new(name, bytes, previews))
}

/// 读取文件夹中的所有文件（不递归），按文件名排序
///
/// 超过 `max_size` 字节的文件会被跳过
pub async fn load_all_files(
    folder_path: &str,
    max_size: u64,
    previews: &PreviewRegistry,
) -> AppResult<Vec<UploadedFile>> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder).await.map_err(read_failed(&folder))?;

    while let Some(entry) = entries.next_entry().await.map_err(read_failed(&folder))? {
        let path = entry.path();
        let metadata = entry.metadata().await.map_err(read_failed(&path))?;
        if !metadata.is_file() {
            continue;
        }
        if metadata.len() > max_size {
            tracing::warn!(
                "跳过过大的文件 {} ({} 字节 > {} 字节)",
                path.display(),
                metadata.len(),
                max_size
            );
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_file(&path, previews).await {
            Ok(file) => files.push(file),
            Err(e) => tracing::warn!("加载文件失败 {}: {}", path.display(), e),
        }
    }

    Ok(files)
}
