//! nnk.gov.hu coronavirus bulletins (Joomla).

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, LinkRule, UrlTemplate};
use lazy_static::lazy_static;

const HOST: UrlTemplate = UrlTemplate::Prefix("https://www.nnk.gov.hu");

lazy_static! {
    pub(super) static ref NEXT_PAGE: LinkRule = LinkRule::Within {
        container: Matcher::tag_class("li", "pagination-next"),
        anchor: Matcher::Tag("a"),
        accept: None,
        template: HOST,
    };
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: None,
        tiers: vec![Matcher::tag_class("h3", "tagtitle")],
        template: HOST,
        fixup: None,
    });
}
