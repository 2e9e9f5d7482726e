//! telex.hu

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, LinkRule, PageScan, UrlTemplate};
use lazy_static::lazy_static;

const HOST: UrlTemplate = UrlTemplate::Prefix("https://telex.hu");

fn paginator() -> PageScan {
    PageScan {
        current: Matcher::tag_class("a", "current-page"),
        pages: Matcher::tag_class("a", "page"),
    }
}

lazy_static! {
    /// Column pages carry an arrow glyph; when it is missing the numbered
    /// links are scanned instead.
    pub(super) static ref NEXT_PAGE: LinkRule = LinkRule::FirstOf(vec![
        LinkRule::First {
            anchor: Matcher::All(vec![
                Matcher::tag_class("a", "page"),
                Matcher::Any(vec![
                    Matcher::TextTrimmed(">"),
                    Matcher::TextTrimmed("›"),
                    Matcher::TextTrimmed("►"),
                ]),
            ]),
            template: HOST,
        },
        LinkRule::Numbered {
            scan: paginator(),
            template: HOST,
        },
    ]);
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: None,
        tiers: vec![Matcher::tag_class("div", "listing_child")],
        template: HOST,
        fixup: None,
    });
    /// Live blogs (`.../elo?oldal=N`).
    pub(super) static ref ARTICLE_NEXT_PAGE: LinkRule = LinkRule::guarded(
        Matcher::tag_class("div", "pagination"),
        LinkRule::Numbered {
            scan: paginator(),
            template: HOST,
        },
    );
}
