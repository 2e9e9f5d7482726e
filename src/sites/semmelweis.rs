//! semmelweis.hu news tag pages.

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    /// Newer tag pages use cards, older ones plain entry titles.
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: None,
        tiers: vec![
            Matcher::tag_class("div", "card-format"),
            Matcher::tag_class("h3", "entry-title"),
        ],
        template: UrlTemplate::AsIs,
        fixup: None,
    });
}
