//! Rule strategies shared by every site.
//!
//! A site is described entirely by values of these types; the evaluation
//! code below is the only place documents are walked.

use crate::matcher::Matcher;
use crate::utils::{safe_hrefs, trailing_number};
use crate::ExtractorError;
use scraper::{ElementRef, Html};
use serde::Deserialize;
use std::collections::HashSet;
use std::iter;

/// How an extracted href becomes an absolute URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlTemplate {
    AsIs,
    /// Scheme and host (or only the scheme) prepended to the href.
    Prefix(&'static str),
}

impl UrlTemplate {
    pub fn apply(&self, href: &str) -> String {
        match self {
            UrlTemplate::AsIs => href.to_string(),
            UrlTemplate::Prefix(prefix) => format!("{}{}", prefix, href),
        }
    }
}

/// Post-processing tied to a known defect of one site's archived markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefFixup {
    /// 444.hu listing pages archived between 2019 and 2021 carry hrefs with a
    /// raw `%` where the live site used `%25`.
    Percent2019To2021,
}

impl HrefFixup {
    pub fn apply(&self, href: &str) -> String {
        match self {
            HrefFixup::Percent2019To2021 => href.replace('%', "%25"),
        }
    }
}

/// Locates the page numbered one above the current one inside a paginator.
///
/// Page numbers are the whole trailing digit run of an href, not its last
/// digit, so paginators past page 9 keep working.
#[derive(Debug)]
pub struct PageScan {
    /// Marker of the current page; its href ends with the current number.
    pub current: Matcher,
    /// Candidate page links. Elements also matching `current` are skipped.
    pub pages: Matcher,
}

impl PageScan {
    fn next_href<'a>(&self, root: ElementRef<'a>) -> Option<&'a str> {
        let current = self
            .current
            .find_first(root)
            .and_then(|el| el.value().attr("href"))
            .and_then(trailing_number)?;
        let wanted = current.checked_add(1)?;

        self.pages
            .find_all(root)
            .filter(|el| !self.current.matches(el))
            .filter_map(|el| el.value().attr("href"))
            .find(|href| trailing_number(href) == Some(wanted))
    }
}

/// Resolves a single "next" link: next listing page or next article page.
#[derive(Debug)]
pub enum LinkRule {
    /// Never yields a link.
    Disabled,
    /// Href of the first element matching `anchor`.
    First {
        anchor: Matcher,
        template: UrlTemplate,
    },
    /// Href of the first `anchor` inside the first `container`. When `accept`
    /// is set the found anchor must satisfy it too, otherwise nothing.
    Within {
        container: Matcher,
        anchor: Matcher,
        accept: Option<Matcher>,
        template: UrlTemplate,
    },
    Numbered {
        scan: PageScan,
        template: UrlTemplate,
    },
    /// `then` when the page holds an element matching `when`, `otherwise` if not.
    Switch {
        when: Matcher,
        then: Box<LinkRule>,
        otherwise: Box<LinkRule>,
    },
    /// First rule yielding a link wins.
    FirstOf(Vec<LinkRule>),
}

impl LinkRule {
    /// Only evaluates `then` when `when` is present.
    pub fn guarded(when: Matcher, then: LinkRule) -> Self {
        LinkRule::Switch {
            when,
            then: Box::new(then),
            otherwise: Box::new(LinkRule::Disabled),
        }
    }

    pub fn resolve(&self, page: &str) -> Option<String> {
        let doc = Html::parse_document(page);
        self.resolve_in(doc.root_element())
    }

    fn resolve_in(&self, root: ElementRef<'_>) -> Option<String> {
        match self {
            LinkRule::Disabled => None,
            LinkRule::First { anchor, template } => anchor
                .find_first(root)
                .and_then(|el| el.value().attr("href"))
                .map(|href| template.apply(href)),
            LinkRule::Within {
                container,
                anchor,
                accept,
                template,
            } => {
                let container = container.find_first(root)?;
                let found = anchor.find_first(container)?;
                if accept.as_ref().map_or(true, |accept| accept.matches(&found)) {
                    found.value().attr("href").map(|href| template.apply(href))
                } else {
                    None
                }
            }
            LinkRule::Numbered { scan, template } => {
                scan.next_href(root).map(|href| template.apply(href))
            }
            LinkRule::Switch {
                when,
                then,
                otherwise,
            } => {
                if when.find_first(root).is_some() {
                    then.resolve_in(root)
                } else {
                    otherwise.resolve_in(root)
                }
            }
            LinkRule::FirstOf(rules) => rules.iter().find_map(|rule| rule.resolve_in(root)),
        }
    }
}

/// Article containers whose first anchor is the article link.
#[derive(Debug)]
pub struct ContainerRule {
    /// Containers are searched inside the first element matching this only.
    pub within: Option<Matcher>,
    /// Tried in order; the first tier matching at least one container is used.
    pub tiers: Vec<Matcher>,
    pub template: UrlTemplate,
    pub fixup: Option<HrefFixup>,
}

impl ContainerRule {
    fn extract(&self, root: ElementRef<'_>) -> HashSet<String> {
        let scope = match &self.within {
            Some(within) => match within.find_first(root) {
                Some(scope) => scope,
                None => return HashSet::new(),
            },
            None => root,
        };

        let containers = self
            .tiers
            .iter()
            .map(|tier| tier.find_all(scope).collect::<Vec<_>>())
            .find(|containers| !containers.is_empty())
            .unwrap_or_default();

        safe_hrefs(containers)
            .map(|href| match self.fixup {
                Some(fixup) => fixup.apply(href),
                None => href.to_string(),
            })
            .map(|href| self.template.apply(&href))
            .collect()
    }
}

/// Harvests the article URLs of one archive page.
#[derive(Debug)]
pub enum ArchiveRule {
    Containers(ContainerRule),
    /// Every `anchor` with an href, inside every `regions` element (or the
    /// whole page).
    Anchors {
        regions: Option<Matcher>,
        anchor: Matcher,
        template: UrlTemplate,
    },
    /// JSON payload: `Data.ArchiveContents[].ContentBoxes[]` HTML fragments.
    JsonFragments { template: UrlTemplate },
}

impl ArchiveRule {
    pub fn extract(&self, page: &str) -> Result<HashSet<String>, ExtractorError> {
        match self {
            ArchiveRule::Containers(rule) => {
                let doc = Html::parse_document(page);
                Ok(rule.extract(doc.root_element()))
            }
            ArchiveRule::Anchors {
                regions,
                anchor,
                template,
            } => {
                let doc = Html::parse_document(page);
                let root = doc.root_element();
                let regions: Vec<ElementRef<'_>> = match regions {
                    Some(regions) => regions.find_all(root).collect(),
                    None => vec![root],
                };
                Ok(regions
                    .into_iter()
                    .flat_map(|region| anchor.find_all(region))
                    .filter_map(|a| a.value().attr("href"))
                    .map(|href| template.apply(href))
                    .collect())
            }
            ArchiveRule::JsonFragments { template } => {
                let payload: ArchivePayload = serde_json::from_str(page)?;
                let mut urls = HashSet::new();
                for content in payload.data.archive_contents {
                    for fragment in content.content_boxes {
                        let fragment = Html::parse_fragment(&fragment);
                        urls.extend(
                            safe_hrefs(iter::once(fragment.root_element()))
                                .map(|href| template.apply(href)),
                        );
                    }
                }
                Ok(urls)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ArchivePayload {
    #[serde(rename = "Data")]
    data: ArchiveData,
}

#[derive(Debug, Deserialize)]
struct ArchiveData {
    #[serde(rename = "ArchiveContents")]
    archive_contents: Vec<ArchiveContent>,
}

#[derive(Debug, Deserialize)]
struct ArchiveContent {
    #[serde(rename = "ContentBoxes")]
    content_boxes: Vec<String>,
}
