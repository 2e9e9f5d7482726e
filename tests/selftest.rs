use news_archive_extractors::selftest::{self, Expect};
use news_archive_extractors::source::{FixtureSource, PageSource};
use news_archive_extractors::{ExtractorError, Family, Site};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

const FIXTURES: &str = "tests/fixtures";

#[test]
fn every_saved_case_passes() {
    let source = FixtureSource::open(FIXTURES).expect("Invalid fixture dir");
    let cases = selftest::load_cases(FIXTURES).expect("Invalid cases file");

    assert_eq!(selftest::run(&source, &cases, &[]).unwrap(), cases.len());
}

#[test]
fn families_can_be_run_alone() {
    let source = FixtureSource::open(FIXTURES).expect("Invalid fixture dir");
    let cases = selftest::load_cases(FIXTURES).expect("Invalid cases file");

    for family in Family::ALL {
        let expected = cases.iter().filter(|case| case.family == family).count();
        assert!(expected > 0, "no {} cases", family);
        assert_eq!(selftest::run(&source, &cases, &[family]).unwrap(), expected);
    }
}

#[test]
fn every_site_has_a_saved_case() {
    let cases = selftest::load_cases(FIXTURES).expect("Invalid cases file");
    let covered: HashSet<Site> = cases.iter().map(|case| case.site).collect();

    for site in Site::ALL {
        if matches!(site, Site::Velvet) {
            continue;
        }
        assert!(covered.contains(&site), "{} has no case", site);
    }
}

#[test]
fn cases_point_at_their_own_site() {
    let cases = selftest::load_cases(FIXTURES).expect("Invalid cases file");
    for case in &cases {
        assert_eq!(Site::from_url(&case.url), Some(case.site), "{}", case.url);
    }
}

#[test]
fn wrong_expectation_is_reported() {
    let source = FixtureSource::open(FIXTURES).expect("Invalid fixture dir");
    let mut cases = selftest::load_cases(FIXTURES).expect("Invalid cases file");
    let case = cases
        .iter_mut()
        .find(|case| case.site == Site::Telex && case.family == Family::NextPage)
        .expect("telex next-page case");
    case.expect = Expect::Next(Some("https://telex.hu/rovat/koronavirus?oldal=6".to_string()));
    let url = case.url.clone();

    match selftest::run(&source, &cases, &[Family::NextPage]) {
        Err(ExtractorError::Mismatch { site, url: failed, .. }) => {
            assert_eq!(site, Site::Telex);
            assert_eq!(failed, url);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn uncached_pages_are_not_fetched() {
    let source = FixtureSource::open(FIXTURES).expect("Invalid fixture dir");
    assert!(matches!(
        source.fetch("https://telex.hu/rovat/koronavirus?oldal=40"),
        Err(ExtractorError::NotCached(_))
    ));
}
