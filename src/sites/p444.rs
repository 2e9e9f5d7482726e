//! 444.hu

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, HrefFixup, LinkRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    pub(super) static ref NEXT_PAGE: LinkRule = LinkRule::First {
        anchor: Matcher::Class("infinity-next button"),
        template: UrlTemplate::AsIs,
    };
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: None,
        tiers: vec![Matcher::Class("card")],
        template: UrlTemplate::AsIs,
        fixup: Some(HrefFixup::Percent2019To2021),
    });
    /// Old live blogs page with `li.arrow`, newer ones with a bootstrap
    /// `a.page-link`. Only the first `li.arrow` counts.
    pub(super) static ref ARTICLE_NEXT_PAGE: LinkRule = LinkRule::Switch {
        when: Matcher::tag_class("li", "arrow"),
        then: Box::new(LinkRule::Within {
            container: Matcher::tag_class("li", "arrow"),
            anchor: Matcher::All(vec![Matcher::Tag("a"), Matcher::Attr("href")]),
            accept: Some(Matcher::TextStartsWith("Következő")),
            template: UrlTemplate::AsIs,
        }),
        otherwise: Box::new(LinkRule::First {
            anchor: Matcher::All(vec![
                Matcher::tag_class("a", "page-link"),
                Matcher::AttrEq("aria-label", "Következő »"),
            ]),
            template: UrlTemplate::AsIs,
        }),
    };
}
