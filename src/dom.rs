//! Structural queries over parsed HTML documents.
//!
//! Thin helpers on top of `scraper` that the discoverer and extractors
//! share: find the first element of a tag whose class attribute contains a
//! set of required substrings, collect anchor hrefs in document order, and
//! extract whitespace-normalized text.
//!
//! The class predicate is deliberately substring-based rather than exact:
//! publishers decorate their class lists with build hashes and layout
//! variants, so matching on the stable fragments survives markup drift.
//! The contract is AND semantics: every required substring must occur in
//! the element's class attribute, treated as one joined string.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("static selector"));

/// True when the element's class attribute contains every required
/// substring.
///
/// An element with no class attribute matches only an empty requirement
/// set.
pub fn class_contains_all(element: ElementRef<'_>, required: &[&str]) -> bool {
    let classes = element.value().attr("class").unwrap_or_default();
    required.iter().all(|needle| classes.contains(needle))
}

/// Find the first element with the given tag whose class attribute
/// satisfies [`class_contains_all`], in document order.
pub fn first_with_classes<'a>(
    document: &'a Html,
    tag: &str,
    required: &[&str],
) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(tag).ok()?;
    document
        .select(&selector)
        .find(|element| class_contains_all(*element, required))
}

/// Find the first element with the given tag, regardless of attributes.
pub fn first_element<'a>(document: &'a Html, tag: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(tag).ok()?;
    document.select(&selector).next()
}

/// Collect the `href` values of every anchor inside `container`, in
/// document order. Duplicates are preserved; they reflect the page's own
/// rendering.
pub fn anchor_hrefs(container: ElementRef<'_>) -> Vec<String> {
    container
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href").map(str::to_string))
        .collect()
}

/// Extract the element's text with whitespace runs collapsed to single
/// spaces and the ends trimmed.
pub fn normalized_text(element: ElementRef<'_>) -> String {
    let raw = element.text().collect::<Vec<_>>().join(" ");
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
