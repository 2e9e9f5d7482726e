//! Offline regression run over saved pages.
//!
//! Every case names a site, a family and a cached URL together with the
//! expected outcome; the first disagreement stops the run.

use crate::source::PageSource;
use crate::{Extracted, ExtractorError, Family, Site};
use itertools::Itertools;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct Case {
    pub family: Family,
    pub site: Site,
    pub url: String,
    pub expect: Expect,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expect {
    /// Next page URL, `null` on the last page.
    Next(Option<String>),
    Urls(Vec<String>),
}

/// Reads `cases.json` from a fixture directory.
pub fn load_cases<P: AsRef<Path>>(dir: P) -> Result<Vec<Case>, ExtractorError> {
    let raw = fs::read_to_string(dir.as_ref().join("cases.json"))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Runs the cases of the requested families (all when empty) in the order
/// next-page, archive, article-next-page. Returns the number of cases checked.
pub fn run<S: PageSource>(
    source: &S,
    cases: &[Case],
    families: &[Family],
) -> Result<usize, ExtractorError> {
    let mut checked = 0;

    for family in Family::ALL {
        if !families.is_empty() && !families.contains(&family) {
            continue;
        }

        for case in cases.iter().filter(|case| case.family == family) {
            info!("Testing {}", case.site);
            let page = source.fetch(&case.url)?;
            let got = case.site.extract(family, &page)?;
            compare(case, got)?;
            checked += 1;
        }
        info!("{} Test OK!", family);
    }

    Ok(checked)
}

fn compare(case: &Case, got: Extracted) -> Result<(), ExtractorError> {
    let mismatch = |detail: String| ExtractorError::Mismatch {
        site: case.site,
        family: case.family,
        url: case.url.clone(),
        detail,
    };

    match (&case.expect, got) {
        (Expect::Next(expected), Extracted::Link(got)) => {
            if *expected == got {
                Ok(())
            } else {
                Err(mismatch(format!("expected {:?}, got {:?}", expected, got)))
            }
        }
        (Expect::Urls(expected), Extracted::Urls(got)) => {
            let expected: HashSet<&str> = expected.iter().map(String::as_str).collect();
            let got: HashSet<&str> = got.iter().map(String::as_str).collect();
            if expected == got {
                return Ok(());
            }
            let missing = expected.difference(&got).sorted().join(", ");
            let unexpected = got.difference(&expected).sorted().join(", ");
            Err(mismatch(format!(
                "missing [{}], unexpected [{}]",
                missing, unexpected
            )))
        }
        (Expect::Next(_), Extracted::Urls(_)) => {
            Err(mismatch("expected a link, got an URL set".to_string()))
        }
        (Expect::Urls(_), Extracted::Link(_)) => {
            Err(mismatch("expected an URL set, got a link".to_string()))
        }
    }
}
