//! nol.hu

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    /// Archive pages have two `.middleCol` columns, each with several leads.
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Anchors {
        regions: Some(Matcher::Class("middleCol")),
        anchor: Matcher::tag_class("a", "vezetoCimkeAfter"),
        template: UrlTemplate::AsIs,
    };
}
