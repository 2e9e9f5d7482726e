//! blikk.hu

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, LinkRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    /// The pager links are protocol-relative (`//www.blikk.hu/...`).
    pub(super) static ref NEXT_PAGE: LinkRule = LinkRule::Within {
        container: Matcher::Class("archiveDayRow2"),
        anchor: Matcher::All(vec![Matcher::Tag("a"), Matcher::Text("Következő oldal")]),
        accept: None,
        template: UrlTemplate::Prefix("https:"),
    };
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: None,
        tiers: vec![Matcher::Class("archiveDayRow")],
        template: UrlTemplate::AsIs,
        fixup: None,
    });
}
