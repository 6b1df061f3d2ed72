use std::collections::HashSet;

/// Clean provider text before it is rendered as HTML.
///
/// Question and answer strings arrive HTML-encoded (`&quot;`, `&#039;`) and may
/// carry inline markup. Only a handful of inline tags survive, with no
/// attributes. Entities are decoded on the way through; only `&`, `<` and `>`
/// come back escaped.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = ["em", "strong", "b", "i", "u", "sub", "sup", "br", "span", "code"]
        .into_iter()
        .collect();

    ammonia::Builder::new()
        .tags(tags)
        .generic_attributes(HashSet::<&str>::new())
        .clean(html)
        .to_string()
}
