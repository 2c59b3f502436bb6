//! Article summarization for headline verification
//!
//! Cleans article text and summarizes it with an OpenAI chat model.

pub mod error;
pub mod openai;
pub mod text;

pub use error::SummarizeError;
pub use openai::OpenAiSummarizer;
pub use text::{clean_text, prepare_summary_input, MAX_SUMMARY_INPUT_CHARS, MIN_SUMMARY_WORDS};
