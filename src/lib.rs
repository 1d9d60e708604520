//! bx - C2C x-ray search query generation
//!
//! Builds the boolean search expressions and direct job board links that
//! bench sales recruiters use to surface corp-to-corp contract requirements,
//! vendor contacts, and hidden postings across job platforms.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;

pub use error::{BxError, Result};
