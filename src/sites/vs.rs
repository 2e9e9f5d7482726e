//! vs.hu; the archive is served as JSON from `/ajax/archive`.

use crate::rules::{ArchiveRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::JsonFragments {
        template: UrlTemplate::Prefix("https://vs.hu"),
    };
}
