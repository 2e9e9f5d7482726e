use crate::{Family, Site};

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("Malformed JSON: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("{site} has no {family} rule")]
    Unsupported { site: Site, family: Family },
    #[error("Unknown site: {0}")]
    UnknownSite(String),
    #[error("Page is not cached: {0}")]
    NotCached(String),
    #[error("Fixture error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{family} check failed for {site} at {url}: {detail}")]
    Mismatch {
        site: Site,
        family: Family,
        url: String,
        detail: String,
    },
}
