//! abcug.hu

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, LinkRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    pub(super) static ref NEXT_PAGE: LinkRule = LinkRule::First {
        anchor: Matcher::tag_class("a", "next"),
        template: UrlTemplate::AsIs,
    };
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: None,
        tiers: vec![Matcher::tag_class("h2", "post-lead")],
        template: UrlTemplate::AsIs,
        fixup: None,
    });
}
