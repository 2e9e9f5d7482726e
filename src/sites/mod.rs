mod abcug;
mod blikk;
mod budapestbeacon;
mod index;
mod magyaridok;
mod magyarnemzet;
mod mosthallottam;
mod nnk;
mod nol;
mod origo;
mod p444;
mod semmelweis;
mod telex;
mod valasz;
mod vs;

use crate::rules::{ArchiveRule, LinkRule};
use crate::ExtractorError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Every site an extraction rule exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Origo,
    Nol,
    #[serde(rename = "444")]
    P444,
    Blikk,
    Index,
    Velvet,
    Divany,
    MagyarNemzet,
    MagyarIdok,
    Valasz,
    Vs,
    Abcug,
    BudapestBeacon,
    Mosthallottam,
    Semmelweis,
    #[serde(rename = "nnk-koronavirus")]
    NnkKoronavirus,
    Telex,
}

/// The three kinds of extraction a site may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// Next page of an archive listing.
    NextPage,
    /// Article URLs of an archive listing.
    Archive,
    /// Next page of a multi-page article.
    ArticleNextPage,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::NextPage, Family::Archive, Family::ArticleNextPage];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::NextPage => write!(f, "next-page"),
            Family::Archive => write!(f, "archive"),
            Family::ArticleNextPage => write!(f, "article-next-page"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Link(Option<String>),
    Urls(HashSet<String>),
}

impl Site {
    pub const ALL: [Site; 17] = [
        Site::Origo,
        Site::Nol,
        Site::P444,
        Site::Blikk,
        Site::Index,
        Site::Velvet,
        Site::Divany,
        Site::MagyarNemzet,
        Site::MagyarIdok,
        Site::Valasz,
        Site::Vs,
        Site::Abcug,
        Site::BudapestBeacon,
        Site::Mosthallottam,
        Site::Semmelweis,
        Site::NnkKoronavirus,
        Site::Telex,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Site::Origo => "origo",
            Site::Nol => "nol",
            Site::P444 => "444",
            Site::Blikk => "blikk",
            Site::Index => "index",
            Site::Velvet => "velvet",
            Site::Divany => "divany",
            Site::MagyarNemzet => "magyarnemzet",
            Site::MagyarIdok => "magyaridok",
            Site::Valasz => "valasz",
            Site::Vs => "vs",
            Site::Abcug => "abcug",
            Site::BudapestBeacon => "budapestbeacon",
            Site::Mosthallottam => "mosthallottam",
            Site::Semmelweis => "semmelweis",
            Site::NnkKoronavirus => "nnk-koronavirus",
            Site::Telex => "telex",
        }
    }

    /// Registered domain; sub-domains of it belong to the same site.
    pub fn host(&self) -> &'static str {
        match self {
            Site::Origo => "origo.hu",
            Site::Nol => "nol.hu",
            Site::P444 => "444.hu",
            Site::Blikk => "blikk.hu",
            Site::Index => "index.hu",
            Site::Velvet => "velvet.hu",
            Site::Divany => "divany.hu",
            Site::MagyarNemzet => "magyarnemzet.hu",
            Site::MagyarIdok => "magyaridok.hu",
            Site::Valasz => "valasz.hu",
            Site::Vs => "vs.hu",
            Site::Abcug => "abcug.hu",
            Site::BudapestBeacon => "budapestbeacon.com",
            Site::Mosthallottam => "mosthallottam.hu",
            Site::Semmelweis => "semmelweis.hu",
            Site::NnkKoronavirus => "nnk.gov.hu",
            Site::Telex => "telex.hu",
        }
    }

    /// Site an URL belongs to, judged by its host.
    pub fn from_url(url: &str) -> Option<Site> {
        let url = url::Url::parse(url).ok()?;
        let host = url.host_str()?;
        Site::ALL.into_iter().find(|site| {
            let domain = site.host();
            host == domain
                || host
                    .strip_suffix(domain)
                    .map_or(false, |sub| sub.ends_with('.'))
        })
    }

    pub fn next_page_rule(&self) -> Option<&'static LinkRule> {
        match self {
            Site::P444 => Some(&*p444::NEXT_PAGE),
            Site::Blikk => Some(&*blikk::NEXT_PAGE),
            Site::MagyarNemzet => Some(&*magyarnemzet::NEXT_PAGE),
            Site::Abcug => Some(&*abcug::NEXT_PAGE),
            Site::BudapestBeacon => Some(&*budapestbeacon::NEXT_PAGE),
            Site::Mosthallottam | Site::Semmelweis => Some(&*mosthallottam::NEXT_PAGE),
            Site::NnkKoronavirus => Some(&*nnk::NEXT_PAGE),
            Site::Telex => Some(&*telex::NEXT_PAGE),
            Site::Origo
            | Site::Nol
            | Site::Index
            | Site::Velvet
            | Site::Divany
            | Site::MagyarIdok
            | Site::Valasz
            | Site::Vs => None,
        }
    }

    pub fn archive_rule(&self) -> &'static ArchiveRule {
        match self {
            Site::Origo => &*origo::ARCHIVE,
            Site::Nol => &*nol::ARCHIVE,
            Site::P444 => &*p444::ARCHIVE,
            Site::Blikk => &*blikk::ARCHIVE,
            Site::Index | Site::Velvet | Site::Divany => &*index::ARCHIVE,
            Site::MagyarNemzet => &*magyarnemzet::ARCHIVE,
            Site::MagyarIdok | Site::Mosthallottam => &*magyaridok::ARCHIVE,
            Site::Valasz => &*valasz::ARCHIVE,
            Site::Vs => &*vs::ARCHIVE,
            Site::Abcug => &*abcug::ARCHIVE,
            Site::BudapestBeacon => &*budapestbeacon::ARCHIVE,
            Site::Semmelweis => &*semmelweis::ARCHIVE,
            Site::NnkKoronavirus => &*nnk::ARCHIVE,
            Site::Telex => &*telex::ARCHIVE,
        }
    }

    pub fn article_next_page_rule(&self) -> Option<&'static LinkRule> {
        match self {
            Site::Origo => Some(&*origo::ARTICLE_NEXT_PAGE),
            Site::P444 => Some(&*p444::ARTICLE_NEXT_PAGE),
            Site::Index | Site::Velvet | Site::Divany => Some(&*index::ARTICLE_NEXT_PAGE),
            Site::Valasz => Some(&*valasz::ARTICLE_NEXT_PAGE),
            Site::Telex => Some(&*telex::ARTICLE_NEXT_PAGE),
            Site::Nol
            | Site::Blikk
            | Site::MagyarNemzet
            | Site::MagyarIdok
            | Site::Vs
            | Site::Abcug
            | Site::BudapestBeacon
            | Site::Mosthallottam
            | Site::Semmelweis
            | Site::NnkKoronavirus => None,
        }
    }

    /// URL of the next archive listing page, `None` on the last one.
    pub fn next_page_url(&self, page: &str) -> Result<Option<String>, ExtractorError> {
        let rule = self.next_page_rule().ok_or(ExtractorError::Unsupported {
            site: *self,
            family: Family::NextPage,
        })?;
        Ok(rule.resolve(page))
    }

    /// Deduplicated article URLs of one archive listing page.
    pub fn article_urls(&self, page: &str) -> Result<HashSet<String>, ExtractorError> {
        self.archive_rule().extract(page)
    }

    /// URL of the next page of a multi-page article, `None` on the last one.
    pub fn next_page_of_article(&self, page: &str) -> Result<Option<String>, ExtractorError> {
        let rule = self.article_next_page_rule().ok_or(ExtractorError::Unsupported {
            site: *self,
            family: Family::ArticleNextPage,
        })?;
        Ok(rule.resolve(page))
    }

    pub fn supports(&self, family: Family) -> bool {
        match family {
            Family::NextPage => self.next_page_rule().is_some(),
            Family::Archive => true,
            Family::ArticleNextPage => self.article_next_page_rule().is_some(),
        }
    }

    pub fn extract(&self, family: Family, page: &str) -> Result<Extracted, ExtractorError> {
        match family {
            Family::NextPage => self.next_page_url(page).map(Extracted::Link),
            Family::Archive => self.article_urls(page).map(Extracted::Urls),
            Family::ArticleNextPage => self.next_page_of_article(page).map(Extracted::Link),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Site {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Site::ALL
            .into_iter()
            .find(|site| site.name() == wanted)
            .ok_or_else(|| ExtractorError::UnknownSite(s.to_string()))
    }
}
