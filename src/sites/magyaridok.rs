//! magyaridok.hu; its headline layout is shared with mosthallottam.hu.

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, UrlTemplate};
use lazy_static::lazy_static;

lazy_static! {
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: None,
        tiers: vec![Matcher::Tag("h2")],
        template: UrlTemplate::AsIs,
        fixup: None,
    });
}
