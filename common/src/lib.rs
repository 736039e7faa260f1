//! Ingredient AI Common Library
//!
//! サーバとWeb(WASM)で共有される型とユーティリティ

pub mod error;
pub mod parser;
pub mod prompts;
pub mod types;

pub use error::{Error, Result};
pub use parser::{extract_json, parse_ingredients};
pub use prompts::ANALYSIS_PROMPT;
pub use types::{ErrorBody, Ingredient};
