//! Upload handling and the PDF → text → structured-resume pipeline.

pub mod handlers;
pub mod pdf;
pub mod prompts;
pub mod structurer;
