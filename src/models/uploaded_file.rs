use crate::infrastructure::{PreviewHandle, PreviewRegistry};
use crate::models::Question;
use phf::phf_map;
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 默认的二进制类型
pub const OCTET_STREAM: &str = "application/octet-stream";

static CONTENT_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "pdf" => "application/pdf",
    "txt" => "text/plain",
    "md" => "text/markdown",
    "html" => "text/html",
    "htm" => "text/html",
    "csv" => "text/csv",
    "json" => "application/json",
    "doc" => "application/msword",
    "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "png" => "image/png",
    "jpg" => "image/jpeg",
    "jpeg" => "image/jpeg",
    "gif" => "image/gif",
    "webp" => "image/webp",
    "bmp" => "image/bmp",
    "svg" => "image/svg+xml",
};

/// 根据文件扩展名推断 MIME 类型
pub fn content_type_for(file_name: &str) -> &'static str {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| CONTENT_TYPES.get(ext.to_ascii_lowercase().as_str()).copied())
        .unwrap_or(OCTET_STREAM)
}

static NEXT_FILE_ID: AtomicU64 = AtomicU64::new(1);

/// 文件在列表中的标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl FileId {
    fn next() -> Self {
        FileId(NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 用户选择的文件，以及上传、生成后附加的信息
///
/// clone 时共享文件内容和预览句柄，最后一个 clone 被丢弃时预览才会释放
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub id: FileId,
    pub name: String,
    pub content_type: &'static str,
    pub bytes: Arc<[u8]>,
    /// 仅图片文件有预览
    pub preview: Option<Arc<PreviewHandle>>,
    /// 上传成功后由服务端返回
    pub asset_id: Option<String>,
    /// 生成成功后填充
    pub questions: Option<Vec<Question>>,
}

impl UploadedFile {
    /// 创建新的文件记录，图片文件会同时创建预览
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, previews: &PreviewRegistry) -> Self {
        let name = name.into();
        let content_type = content_type_for(&name);
        let bytes: Arc<[u8]> = Arc::from(bytes);
        let preview = content_type
            .starts_with("image/")
            .then(|| Arc::new(previews.create(Arc::clone(&bytes))));

        Self {
            id: FileId::next(),
            name,
            content_type,
            bytes,
            preview,
            asset_id: None,
            questions: None,
        }
    }

    pub fn with_asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.asset_id = Some(asset_id.into());
        self
    }

    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = Some(questions);
        self
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_deref().map(PreviewHandle::url)
    }

    /// 是否已有可展示的题目
    pub fn has_questions(&self) -> bool {
        self.questions.as_ref().is_some_and(|q| !q.is_empty())
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
