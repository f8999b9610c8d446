pub mod document_api;

pub use document_api::DocumentApi;
