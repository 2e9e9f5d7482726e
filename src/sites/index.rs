//! index.hu and its sister sites velvet.hu and divany.hu.

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, LinkRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: None,
        tiers: vec![Matcher::Tag("article")],
        template: UrlTemplate::AsIs,
        fixup: None,
    });
    /// index.hu marks the pager with `div.pagination clearfix`, where the
    /// `rel`-less `a.next` leads forward. Velvet uses a bare `a.next[data-page][href]`.
    pub(super) static ref ARTICLE_NEXT_PAGE: LinkRule = LinkRule::Switch {
        when: Matcher::All(vec![Matcher::Tag("div"), Matcher::Class("pagination clearfix")]),
        then: Box::new(LinkRule::Within {
            container: Matcher::All(vec![Matcher::Tag("div"), Matcher::Class("pagination clearfix")]),
            anchor: Matcher::All(vec![
                Matcher::tag_class("a", "next"),
                Matcher::Not(Box::new(Matcher::Attr("rel"))),
            ]),
            accept: None,
            template: UrlTemplate::AsIs,
        }),
        otherwise: Box::new(LinkRule::First {
            anchor: Matcher::All(vec![
                Matcher::tag_class("a", "next"),
                Matcher::Attr("data-page"),
                Matcher::Attr("href"),
            ]),
            template: UrlTemplate::AsIs,
        }),
    };
}
