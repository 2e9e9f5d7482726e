use lazy_regex::regex;
use scraper::ElementRef;

/// Href of the first anchor below each container. Containers without an
/// anchor, or whose first anchor has no `href`, contribute nothing.
pub fn safe_hrefs<'a, I>(containers: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    containers.into_iter().filter_map(|container| {
        container
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "a")
            .and_then(|a| a.value().attr("href"))
    })
}

/// Number at the very end of an URL, `/elo?oldal=3` -> 3.
pub(crate) fn trailing_number(href: &str) -> Option<u32> {
    regex!(r"(\d+)$")
        .captures(href)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
