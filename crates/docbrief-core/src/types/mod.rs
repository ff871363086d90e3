//! Core types for docbrief.

mod document;
mod message;
mod metadata;
mod summary;

pub use document::*;
pub use message::*;
pub use metadata::*;
pub use summary::*;
