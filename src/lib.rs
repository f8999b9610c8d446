//! # Quizgen
//!
//! 上传文档、调用远程服务生成学习题目，并把模型输出解析为结构化题目的客户端
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（预览数据），只暴露能力
//! - `PreviewRegistry` - 创建预览地址，句柄丢弃时自动释放
//!
//! ### ② 业务能力层（Services / Clients）
//! - `services/` - `DocumentApi`，描述"上传 / 生成"能力
//! - `clients/` - `DocumentClient`，基于 reqwest 的实现
//!
//! ### ③ 解析与状态（Parser / State）
//! - `parser/` - 按模式（general / mcq / fitb）把返回内容解析为题目
//! - `state/` - 不可变的页面状态和 reducer
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 并发批量上传 / 生成，fail-fast
//! - `orchestrator/app` - 一次会话的完整流程
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod render;
pub mod services;
pub mod state;
pub mod utils;

// 重新导出常用类型
pub use clients::DocumentClient;
pub use config::Config;
pub use error::{AppError, AppResult, FormatError, NetworkError};
pub use models::{Mode, Question, QuestionKind, RawPayload, UploadedFile};
pub use orchestrator::App;
pub use parser::{parse, parse_value};
pub use services::DocumentApi;
pub use state::{Action, AppState};
