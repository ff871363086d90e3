//! Core traits for docbrief providers.

mod llm;

pub use llm::*;
