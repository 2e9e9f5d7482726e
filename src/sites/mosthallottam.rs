//! mosthallottam.hu; the WordPress pager is shared with semmelweis.hu.

use crate::matcher::Matcher;
use crate::rules::{LinkRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    pub(super) static ref NEXT_PAGE: LinkRule = LinkRule::First {
        anchor: Matcher::tag_class("a", "nextpostslink"),
        template: UrlTemplate::AsIs,
    };
}
