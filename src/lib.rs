//! Extraction rules for crawling the archives of Hungarian news sites.
//!
//! Given the raw text of an already downloaded page, a [`Site`] can tell
//! the next archive listing page, the article URLs listed on an archive
//! page and the next page of a multi-page article.

pub mod matcher;
pub mod rules;
pub mod selftest;
pub mod source;

mod error;
mod sites;
mod utils;

pub use error::ExtractorError;
pub use sites::{Extracted, Family, Site};
pub use utils::safe_hrefs;
