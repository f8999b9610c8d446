//! 页面状态
//!
//! 文件列表、加载标记、错误信息和当前模式都放在一个不可变的状态记录里，
//! 所有修改都通过 `AppState::reduce` 完成，文件列表只会被整体替换。

use crate::models::{FileId, Mode, UploadedFile};

/// 页面状态
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub files: Vec<UploadedFile>,
    /// 批量操作进行中
    pub loading: bool,
    /// 最近一次操作失败时展示给用户的提示
    pub error: Option<String>,
    pub mode: Mode,
}

/// 状态变更动作
#[derive(Debug)]
pub enum Action {
    SelectMode(Mode),
    UploadStarted,
    /// 新上传的文件追加到列表末尾
    UploadSucceeded(Vec<UploadedFile>),
    UploadFailed(String),
    GenerateStarted,
    /// 带题目的文件列表整体替换原列表
    GenerateSucceeded(Vec<UploadedFile>),
    GenerateFailed(String),
    RemoveFile(FileId),
}

impl AppState {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// 应用一个动作，返回新的状态
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::SelectMode(mode) => Self { mode, ..self },
            Action::UploadStarted | Action::GenerateStarted => Self {
                loading: true,
                error: None,
                ..self
            },
            Action::UploadSucceeded(uploaded) => {
                let files = self.files.into_iter().chain(uploaded).collect();
                Self {
                    files,
                    loading: false,
                    ..self
                }
            }
            Action::GenerateSucceeded(files) => Self {
                files,
                loading: false,
                ..self
            },
            Action::UploadFailed(message) | Action::GenerateFailed(message) => Self {
                loading: false,
                error: Some(message),
                ..self
            },
            Action::RemoveFile(id) => {
                let files = self.files.into_iter().filter(|file| file.id != id).collect();
                Self { files, ..self }
            }
        }
    }

    /// 能否开始生成：需要至少一个文件，且没有进行中的操作
    pub fn can_generate(&self) -> bool {
        !self.files.is_empty() && !self.loading
    }

    pub fn find(&self, id: FileId) -> Option<&UploadedFile> {
        self.files.iter().find(|file| file.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::PreviewRegistry;
    use crate::models::Question;

    fn file(name: &str, registry: &PreviewRegistry) -> UploadedFile {
        UploadedFile::new(name, b"data".to_vec(), registry)
    }

    #[test]
    fn test_upload_lifecycle() {
        let registry = PreviewRegistry::new();
        let existing = file("a.pdf", &registry).with_asset_id("a");

        let state = AppState::new(Mode::Mcq)
            .reduce(Action::UploadSucceeded(vec![existing]))
            .reduce(Action::UploadStarted);
        assert!(state.loading);
        assert!(!state.can_generate());

        let state = state.reduce(Action::UploadFailed("Failed".to_string()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed"));
        assert_eq!(state.files.len(), 1);

        let state = state
            .reduce(Action::UploadStarted)
            .reduce(Action::UploadSucceeded(vec![file("b.pdf", &registry).with_asset_id("b")]));
        assert_eq!(state.error, None);
        let names: Vec<&str> = state.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
        assert_eq!(state.mode, Mode::Mcq);
    }

    #[test]
    fn test_generate_replaces_files() {
        let registry = PreviewRegistry::new();
        let original = file("a.pdf", &registry).with_asset_id("a");
        let generated = original.clone().with_questions(vec![Question::question("Q1?")]);

        let state = AppState::default()
            .reduce(Action::UploadSucceeded(vec![original]))
            .reduce(Action::GenerateStarted)
            .reduce(Action::GenerateSucceeded(vec![generated]));

        assert!(!state.loading);
        assert!(state.files[0].has_questions());
    }

    #[test]
    fn test_remove_file_releases_preview() {
        let registry = PreviewRegistry::new();
        let image = file("diagram.png", &registry);
        let id = image.id;

        let state = AppState::default()
            .reduce(Action::UploadSucceeded(vec![image, file("b.txt", &registry)]));
        assert_eq!(registry.live_count(), 1);

        let state = state.reduce(Action::RemoveFile(id));
        assert!(state.find(id).is_none());
        assert_eq!(state.files.len(), 1);
        assert_eq!(registry.live_count(), 0);
    }
}
