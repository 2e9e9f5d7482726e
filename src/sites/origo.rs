//! origo.hu

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, LinkRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: None,
        tiers: vec![Matcher::Class("archive-cikk")],
        template: UrlTemplate::AsIs,
        fixup: None,
    });
    /// Paged articles are no longer followed on origo.hu.
    pub(super) static ref ARTICLE_NEXT_PAGE: LinkRule = LinkRule::Disabled;
}
