//! curate-jobs
//!
//! Parses Hacker News "Who is hiring" comments into job postings and runs the
//! fetch step that feeds them downstream. `parser` is pure and works without
//! network access; `step` wires it to an [`ItemSource`], a state store and an
//! event sink.
pub mod error;
pub mod hn;
pub mod markup;
pub mod parser;
pub mod sink;
pub mod step;
pub mod store;

pub use error::FetchError;
pub use hn::{HnClient, HnItem, ItemSource};
pub use parser::{parse_comment, PostingParser};
pub use sink::{MemorySink, NdjsonSink};
pub use step::FetchJobsStep;
pub use store::{JsonFileStateStore, MemoryStateStore};
