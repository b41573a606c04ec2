//! Text-to-question parsing.
//!
//! Document text is split into trimmed, non-empty lines. Each line is
//! classified by an ordered rule table and folded into a list of
//! [`Question`](crate::models::Question) records.

mod line;
mod mcq;

pub use line::{classify, ClassifiedLine, LineKind};
pub use mcq::{parse_mcqs, working_lines};
