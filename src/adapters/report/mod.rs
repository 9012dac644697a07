//! Recommendation report rendering. Presentation only; all numbers come
//! from the domain results unchanged.

mod markdown;

pub use markdown::MarkdownReport;
