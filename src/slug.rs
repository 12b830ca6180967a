use unidecode::unidecode;

/// Normalizes a title or an authored `postSlug` into its URL form:
/// ASCII-transliterated, lowercased, whitespace and separator runs
/// collapsed to a single `-`, everything else dropped.
pub fn slugify(text: &str) -> String {
    let text = unidecode(text.trim());

    let mut slug = String::with_capacity(text.len());
    let mut prev_dash = true; // swallows leading separators

    for c in text.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            prev_dash = false;
        } else if c.is_whitespace() || c == '-' || c == '_' {
            if !prev_dash {
                slug.push('-');
                prev_dash = true;
            }
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// An explicit, non-blank `postSlug` wins; the title is the fallback.
pub fn resolve(post_slug: Option<&str>, title: &str) -> String {
    match post_slug {
        Some(s) if !s.trim().is_empty() => slugify(s),
        _ => slugify(title),
    }
}
