//! valasz.hu

use crate::matcher::Matcher;
use crate::rules::{ArchiveRule, ContainerRule, LinkRule, UrlTemplate};
use lazy_static::lazy_static;

const HOST: UrlTemplate = UrlTemplate::Prefix("http://valasz.hu");

lazy_static! {
    /// The opinion column ("publi") was renamed from the regular list class.
    pub(super) static ref ARCHIVE: ArchiveRule = ArchiveRule::Containers(ContainerRule {
        within: Some(Matcher::All(vec![
            Matcher::Tag("section"),
            Matcher::Any(vec![
                Matcher::Class("normal cikk lista"),
                Matcher::Class("publi cikk lista"),
            ]),
        ])),
        tiers: vec![Matcher::All(vec![
            Matcher::Tag("article"),
            Matcher::AttrEq("itemscope", ""),
        ])],
        template: HOST,
        fixup: None,
    });
    pub(super) static ref ARTICLE_NEXT_PAGE: LinkRule = LinkRule::guarded(
        Matcher::tag_class("article", "percro-percre-lista"),
        LinkRule::First {
            anchor: Matcher::All(vec![Matcher::Tag("a"), Matcher::AttrToken("rel", "next")]),
            template: HOST,
        },
    );
}

#[cfg(test)]
mod tests {
    use crate::Site;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn set(urls: &[&str]) -> HashSet<String> {
        urls.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn normal_column() {
        let html = r#"
            <section class="kiemelt cikk lista">
                <article itemscope><a href="/itthon/kiemelt-1">kiemelt</a></article>
            </section>
            <section class="normal cikk lista">
                <article itemscope itemtype="http://schema.org/Article"><h2><a href="/itthon/halapenzt-reszletre-129174">Hálapénz</a></h2></article>
                <article itemscope><a href="/itthon/szeressuk-a-szarkakat-129223">Szarkák</a></article>
                <article class="hirdetes"><a href="/itthon/hirdetes">hirdetés</a></article>
            </section>"#;
        assert_eq!(
            Site::Valasz.article_urls(html).unwrap(),
            set(&[
                "http://valasz.hu/itthon/halapenzt-reszletre-129174",
                "http://valasz.hu/itthon/szeressuk-a-szarkakat-129223",
            ])
        );
    }

    #[test]
    fn publi_column() {
        let html = r#"
            <section class="publi cikk lista">
                <article itemscope><a href="/publi/szelektiven-nemzeti-kormany-127741">Publi</a></article>
            </section>"#;
        assert_eq!(
            Site::Valasz.article_urls(html).unwrap(),
            set(&["http://valasz.hu/publi/szelektiven-nemzeti-kormany-127741"])
        );
    }

    #[test]
    fn page_without_list_section() {
        let html = r#"<article itemscope><a href="/itthon/x-1">x</a></article>"#;
        assert_eq!(Site::Valasz.article_urls(html).unwrap(), HashSet::new());
    }

    #[test]
    fn minute_by_minute_pages() {
        let middle = r#"
            <article class="percro-percre-lista"><p>...</p></article>
            <a rel="prev" href="/itthon/percrol-percre-az-onkormanyzati-valasztasokrol-105350?page=2">Előző</a>
            <a rel="next" href="/itthon/percrol-percre-az-onkormanyzati-valasztasokrol-105350?page=4">Következő</a>"#;
        assert_eq!(
            Site::Valasz.next_page_of_article(middle).unwrap(),
            Some("http://valasz.hu/itthon/percrol-percre-az-onkormanyzati-valasztasokrol-105350?page=4".to_string())
        );

        let last = r#"
            <article class="percro-percre-lista"><p>...</p></article>
            <a rel="prev" href="/vilag/kelet-ukrajna-percrol-percre-103699?page=2">Előző</a>"#;
        assert_eq!(Site::Valasz.next_page_of_article(last).unwrap(), None);

        let multi_token = r#"
            <article class="percro-percre-lista"></article>
            <a rel="prev nofollow" href="/itthon/x?page=2">Előző</a>
            <a rel="next nofollow" href="/itthon/x?page=4">Következő</a>"#;
        assert_eq!(
            Site::Valasz.next_page_of_article(multi_token).unwrap(),
            Some("http://valasz.hu/itthon/x?page=4".to_string())
        );

        let regular = r#"<article class="cikk"></article><a rel="next" href="/itthon/other?page=2">x</a>"#;
        assert_eq!(Site::Valasz.next_page_of_article(regular).unwrap(), None);
    }
}
