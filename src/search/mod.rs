//! X-ray search query generation
//!
//! Encodes the Google-operator search patterns bench sales recruiters use to
//! find contract requirements, vendor contacts, and hidden postings, plus
//! direct links into each board's native search.

pub mod boards;
pub mod builders;
pub mod encode;
pub mod engine;
pub mod hotlist;
pub mod params;
pub mod query;
pub mod synonyms;
pub mod terms;

pub use boards::{JobBoardLink, all_boards};
pub use engine::XRaySearchEngine;
pub use params::SearchParams;
pub use query::{QueryCategory, SearchPlatform, SearchQuery};
