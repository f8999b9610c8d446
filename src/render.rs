//! 文本输出
//!
//! 把当前状态渲染为终端可读的文本：已上传文件列表、错误提示和生成的题目

use crate::models::{Question, UploadedFile};
use crate::state::AppState;
use std::fmt::Write;

const INDENT: &str = "    ";

/// 渲染整个页面
pub fn render_page(state: &AppState) -> String {
    let mut out = String::new();

    let files = render_file_list(&state.files);
    if !files.is_empty() {
        out.push_str(&files);
    }

    if let Some(error) = &state.error {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "Error: {}", error);
    }

    let questions = render_questions(&state.files);
    if !questions.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&questions);
    }

    out
}

/// 已上传文件列表，列表为空时返回空字符串
pub fn render_file_list(files: &[UploadedFile]) -> String {
    if files.is_empty() {
        return String::new();
    }

    let mut out = String::from("Uploaded Files\n");
    for file in files {
        let _ = writeln!(out, "  {}", file.name);
        if let Some(asset_id) = &file.asset_id {
            let _ = writeln!(out, "{}Asset ID: {}", INDENT, asset_id);
        }
        if let Some(url) = file.preview_url() {
            let _ = writeln!(out, "{}Preview: {}", INDENT, url);
        }
    }
    out
}

/// 生成的题目，没有任何文件带题目时返回空字符串
pub fn render_questions(files: &[UploadedFile]) -> String {
    if !files.iter().any(UploadedFile::has_questions) {
        return String::new();
    }

    let mut out = String::from("Generated Questions\n");
    for file in files.iter().filter(|f| f.has_questions()) {
        let _ = writeln!(out, "\n[{}]", file.name);
        for question in file.questions.iter().flatten() {
            out.push_str(&render_question(question));
        }
    }
    out
}

/// 标题加粗显示，其余题目作为列表项，多行文本续行缩进
fn render_question(question: &Question) -> String {
    if question.is_header() {
        return format!("  **{}**\n", question.text);
    }

    let mut out = String::new();
    for (i, line) in question.text.lines().enumerate() {
        if i == 0 {
            let _ = writeln!(out, "  - {}", line);
        } else if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "{}{}", INDENT, line);
        }
    }
    out
}
