//! budapestbeacon.com and hu.budapestbeacon.com

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, LinkRule, UrlTemplate};
use lazy_static::lazy_static;
use scraper::Selector;

const E: &str = "Invalid selector";
lazy_static! {
    pub(super) static ref NEXT_PAGE: LinkRule = LinkRule::First {
        anchor: Matcher::Css(Selector::parse(".next").expect(E)),
        template: UrlTemplate::AsIs,
    };
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Anchors {
        regions: None,
        anchor: Matcher::Css(Selector::parse(".entry-title a").expect(E)),
        template: UrlTemplate::AsIs,
    };
}
