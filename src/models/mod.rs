pub mod loaders;
pub mod mode;
pub mod payload;
pub mod question;
pub mod uploaded_file;

pub use loaders::{load_all_files, load_file};
pub use mode::Mode;
pub use payload::RawPayload;
pub use question::{Question, QuestionKind};
pub use uploaded_file::{FileId, UploadedFile};
