pub mod classify;
pub mod error;
pub mod export;
pub mod record;
pub mod render;
pub mod sink;

// Re-export main API
pub use classify::{status_tag, status_tag_for_code, PairRole};
pub use error::BinError;
pub use export::{BinningSummary, GroupCounts};
pub use record::{ChainLink, MappedRead, ReadHandle, ReadStore};
pub use render::{render_chain, render_read, sprint_read};
pub use sink::open_sink;
