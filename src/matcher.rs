//! Element predicates the site rules are written in.
//!
//! A [`Matcher`] is a tree of primitive predicates (tag name, class, attribute,
//! text) joined by `All`/`Any`/`Not`. Lookups walk the descendants of a scope
//! element in document order, never the scope element itself.

use scraper::{ElementRef, Selector};

#[derive(Debug)]
pub enum Matcher {
    /// Element name, e.g. `a` or `h2`.
    Tag(&'static str),
    /// One of the class tokens, or the whole `class` attribute verbatim.
    Class(&'static str),
    /// Attribute presence.
    Attr(&'static str),
    AttrEq(&'static str, &'static str),
    /// One of the whitespace separated tokens of an attribute, e.g. `rel`.
    AttrToken(&'static str, &'static str),
    /// Whole text content, compared exactly.
    Text(&'static str),
    TextTrimmed(&'static str),
    TextStartsWith(&'static str),
    Css(Selector),
    All(Vec<Matcher>),
    Any(Vec<Matcher>),
    Not(Box<Matcher>),
}

impl Matcher {
    /// Shorthand for `tag.class`.
    pub fn tag_class(tag: &'static str, class: &'static str) -> Self {
        Matcher::All(vec![Matcher::Tag(tag), Matcher::Class(class)])
    }

    pub fn matches(&self, el: &ElementRef<'_>) -> bool {
        let value = el.value();
        match self {
            Matcher::Tag(name) => value.name() == *name,
            Matcher::Class(name) => {
                value.attr("class") == Some(*name) || value.classes().any(|c| c == *name)
            }
            Matcher::Attr(name) => value.attr(name).is_some(),
            Matcher::AttrEq(name, expected) => value.attr(name) == Some(*expected),
            Matcher::AttrToken(name, token) => value
                .attr(name)
                .map_or(false, |attr| attr.split_ascii_whitespace().any(|t| t == *token)),
            Matcher::Text(expected) => text_of(el) == *expected,
            Matcher::TextTrimmed(expected) => text_of(el).trim() == *expected,
            Matcher::TextStartsWith(prefix) => text_of(el).starts_with(*prefix),
            Matcher::Css(selector) => selector.matches(el),
            Matcher::All(all) => all.iter().all(|m| m.matches(el)),
            Matcher::Any(any) => any.iter().any(|m| m.matches(el)),
            Matcher::Not(inner) => !inner.matches(el),
        }
    }

    pub fn find_first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.find_all(scope).next()
    }

    pub fn find_all<'a, 'm>(
        &'m self,
        scope: ElementRef<'a>,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'm
    where
        'a: 'm,
    {
        scope
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(move |el| self.matches(el))
    }
}

fn text_of(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::Html;

    const PAGE: &str = r#"
        <html><body>
            <div class="infinity-next button" id="multi"><a href="/x">x</a></div>
            <div class="listing card wide" id="tokens"></div>
            <ul>
                <li class="arrow"><a href="/prev">« Előző</a></li>
                <li><a class="page" href="/p?oldal=1"> ► </a></li>
            </ul>
            <article itemscope><a>no link</a></article>
        </body></html>
    "#;

    fn ids<'a>(found: impl Iterator<Item = ElementRef<'a>>) -> Vec<String> {
        found
            .map(|el| {
                el.value()
                    .attr("id")
                    .map(ToString::to_string)
                    .unwrap_or_else(|| el.value().name().to_string())
            })
            .collect()
    }

    #[test]
    fn class_matches_token_or_whole_attribute() {
        let doc = Html::parse_document(PAGE);
        let root = doc.root_element();

        let whole = Matcher::Class("infinity-next button");
        assert_eq!(ids(whole.find_all(root)), vec!["multi".to_string()]);

        let token = Matcher::Class("card");
        assert_eq!(ids(token.find_all(root)), vec!["tokens".to_string()]);

        let partial = Matcher::Class("infinity-next wide");
        assert!(partial.find_first(root).is_none());
    }

    #[test]
    fn text_predicates() {
        let doc = Html::parse_document(PAGE);
        let root = doc.root_element();

        let glyph = Matcher::All(vec![Matcher::Tag("a"), Matcher::TextTrimmed("►")]);
        let found = glyph.find_first(root).and_then(|a| a.value().attr("href"));
        assert_eq!(found, Some("/p?oldal=1"));

        assert!(Matcher::Text("►").find_first(root).is_none());
        assert!(Matcher::TextStartsWith("« Előző").find_first(root).is_some());
    }

    #[test]
    fn attribute_predicates_and_combinators() {
        let doc = Html::parse_document(PAGE);
        let root = doc.root_element();

        let article = Matcher::All(vec![Matcher::Tag("article"), Matcher::AttrEq("itemscope", "")]);
        assert!(article.find_first(root).is_some());

        let hrefless = Matcher::All(vec![
            Matcher::Tag("a"),
            Matcher::Not(Box::new(Matcher::Attr("href"))),
        ]);
        assert_eq!(hrefless.find_all(root).count(), 1);

        let either = Matcher::Any(vec![Matcher::Class("arrow"), Matcher::Tag("ul")]);
        assert_eq!(either.find_all(root).count(), 2);
    }

    #[test]
    fn attribute_tokens() {
        let doc = Html::parse_document(
            r#"<a rel="nofollow" href="/a">a</a><a rel="next  nofollow" href="/b">b</a><a rel="nextpage" href="/c">c</a>"#,
        );
        let next = Matcher::AttrToken("rel", "next");
        let found: Vec<&str> = next
            .find_all(doc.root_element())
            .filter_map(|a| a.value().attr("href"))
            .collect();
        assert_eq!(found, vec!["/b"]);
        assert!(Matcher::AttrToken("data-page", "1").find_first(doc.root_element()).is_none());
    }

    #[test]
    fn scope_itself_is_not_a_candidate() {
        let doc = Html::parse_document(PAGE);
        let article = Matcher::Tag("article")
            .find_first(doc.root_element())
            .expect("article present");

        assert!(Matcher::Tag("article").find_first(article).is_none());
        assert!(Matcher::Tag("a").find_first(article).is_some());
    }

    #[test]
    fn css_selector() {
        let doc = Html::parse_document(PAGE);
        let selector = Selector::parse("li.arrow a").expect("Invalid selector");
        let found = Matcher::Css(selector)
            .find_first(doc.root_element())
            .and_then(|a| a.value().attr("href"));
        assert_eq!(found, Some("/prev"));
    }
}
