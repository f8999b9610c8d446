//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量处理器
//! - 一批文件的所有请求并发发出
//! - 任意一个失败则整批失败（fail-fast），不保留部分结果
//!
//! ### `app` - 应用主结构
//! - 持有状态（AppState）、远程服务和预览注册表
//! - 把用户操作转换为批量请求，并把结果写回状态
//! - 进行中的操作会阻止新的批量操作
//!
//! ## 层次关系
//!
//! ```text
//! app (一次用户操作)
//!     ↓
//! batch_processor (处理 Vec<UploadedFile>)
//!     ↓
//! parser (解析单个文件的返回内容)
//!     ↓
//! services::DocumentApi (能力层：上传 / 生成)
//!     ↓
//! clients::DocumentClient (HTTP)
//! ```

pub mod app;
pub mod batch_processor;

pub use app::App;
pub use batch_processor::{generate_batch, upload_batch};
