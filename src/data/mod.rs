mod extract;
mod loader;

pub use extract::{extract_pdf_text, join_pages};
pub use loader::{export_questions_to_json, load_questions, LoadError, SourceKind};
