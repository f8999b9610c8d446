//! 应用主结构 - 编排层
//!
//! 对应一次页面会话：持有状态、远程服务和预览注册表，
//! 负责把用户操作转换为批量请求，并把结果写回状态。

use crate::clients::DocumentClient;
use crate::config::Config;
use crate::error::{AppResult, GENERATE_FAILED_MESSAGE, UPLOAD_FAILED_MESSAGE};
use crate::infrastructure::PreviewRegistry;
use crate::models::{self, FileId, Mode, UploadedFile};
use crate::orchestrator::batch_processor;
use crate::render;
use crate::services::DocumentApi;
use crate::state::{Action, AppState};
use crate::utils::logging::{self, RunStats};
use anyhow::Result;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App<A: DocumentApi> {
    config: Config,
    api: A,
    previews: PreviewRegistry,
    state: AppState,
}

impl App<DocumentClient> {
    /// 使用真实的远程服务初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);
        let api = DocumentClient::new(&config)?;
        Ok(Self::with_api(config, api))
    }
}

impl<A: DocumentApi> App<A> {
    /// 使用指定的服务实现创建应用
    pub fn with_api(config: Config, api: A) -> Self {
        let state = AppState::new(config.mode);
        Self {
            config,
            api,
            previews: PreviewRegistry::new(),
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    /// 运行一次完整流程：加载目录中的文件 → 上传 → 生成题目 → 输出
    pub async fn run(&mut self) -> Result<RunStats> {
        info!("\n📁 正在扫描待上传的文件...");
        let files = models::load_all_files(
            &self.config.input_dir,
            self.config.max_file_size_bytes,
            &self.previews,
        )
        .await?;

        let mut stats = RunStats {
            files: files.len(),
            ..Default::default()
        };

        if files.is_empty() {
            warn!("⚠️ 没有找到待上传的文件，程序结束");
            return Ok(stats);
        }
        logging::log_files_loaded(files.len(), &self.config.input_dir);

        if self.upload(files).await.is_err() {
            stats.failed_actions += 1;
        }
        stats.uploaded = self.state.files.len();

        if self.state.can_generate() && self.generate().await.is_err() {
            stats.failed_actions += 1;
        }
        stats.questions = self
            .state
            .files
            .iter()
            .filter_map(|file| file.questions.as_ref())
            .map(Vec::len)
            .sum();

        println!("{}", render::render_page(&self.state));
        logging::print_final_stats(&stats);

        Ok(stats)
    }

    /// 上传一批文件，成功后追加到文件列表
    ///
    /// 任意一个文件上传失败时整批丢弃，错误提示写入状态。
    /// `&mut self` 保证进行中的批量操作结束前不会开始新的操作
    pub async fn upload(&mut self, files: Vec<UploadedFile>) -> AppResult<()> {
        if files.is_empty() {
            return Ok(());
        }

        let count = files.len();
        logging::log_batch_start("上传", count);
        self.dispatch(Action::UploadStarted);

        match batch_processor::upload_batch(&self.api, files).await {
            Ok(uploaded) => {
                logging::log_batch_complete("上传", count);
                self.dispatch(Action::UploadSucceeded(uploaded));
                Ok(())
            }
            Err(e) => {
                error!("❌ 上传文件失败: {}", e);
                self.dispatch(Action::UploadFailed(e.user_message(UPLOAD_FAILED_MESSAGE)));
                Err(e)
            }
        }
    }

    /// 为列表中的所有文件生成题目
    ///
    /// 全部成功时整体替换文件列表，否则列表保持不变
    pub async fn generate(&mut self) -> AppResult<()> {
        if self.state.files.is_empty() {
            warn!("⚠️ 文件列表为空，无需生成");
            return Ok(());
        }

        let mode = self.state.mode;
        let count = self.state.files.len();
        logging::log_batch_start("生成题目", count);
        self.dispatch(Action::GenerateStarted);

        match batch_processor::generate_batch(&self.api, &self.state.files, mode).await {
            Ok(files) => {
                logging::log_batch_complete("生成题目", count);
                self.dispatch(Action::GenerateSucceeded(files));
                Ok(())
            }
            Err(e) => {
                error!("❌ 生成题目失败: {}", e);
                self.dispatch(Action::GenerateFailed(e.user_message(GENERATE_FAILED_MESSAGE)));
                Err(e)
            }
        }
    }

    /// 从列表中移除文件，同时释放其预览
    pub fn remove(&mut self, id: FileId) {
        if let Some(file) = self.state.find(id) {
            info!("🗑️ 移除文件: {}", file.name);
        }
        self.dispatch(Action::RemoveFile(id));
    }

    pub fn select_mode(&mut self, mode: Mode) {
        self.dispatch(Action::SelectMode(mode));
    }
}
