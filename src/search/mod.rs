//! Search over recipes and blog posts
//!
//! ```text
//!                    query + corpus
//!                          │
//!        ┌─────────────────┼─────────────────┐
//!        ▼                 ▼                 ▼
//!  ┌───────────┐    ┌────────────┐    ┌────────────┐
//!  │ TextIndex │    │ substring  │    │   fuzzy    │
//!  │  (BM25)   │    │  (regex)   │    │ (partial)  │
//!  └───────────┘    └────────────┘    └────────────┘
//!        │                 │                 │
//!        └────────► concat + dedup ◄─────────┘
//!                          │
//!                          ▼
//!                  SearchResultSet
//! ```

pub mod aggregator;
pub mod text_index;

pub use aggregator::{MatchSource, SearchAggregator, SearchHit, SearchResultSet};
pub use text_index::{Bm25Index, TextIndex};
