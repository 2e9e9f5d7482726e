//! magyarnemzet.hu

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, LinkRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    pub(super) static ref NEXT_PAGE: LinkRule = LinkRule::First {
        anchor: Matcher::Class("en-navigation-line-right-arrow"),
        template: UrlTemplate::AsIs,
    };
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: None,
        tiers: vec![Matcher::Tag("h2")],
        template: UrlTemplate::AsIs,
        fixup: None,
    });
}
