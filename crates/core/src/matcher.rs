/// Case-insensitive ordered-subsequence containment: every character of
/// `query` must appear in `text` in the same relative order, not
/// necessarily contiguously. This is not edit-distance matching, so
/// "mtrcycle" matches "motorcycle" but "rbch" does not match
/// "Honda CBR600RR".
pub fn is_subsequence_match(text: &str, query: &str) -> bool {
    let mut pattern = query.chars().flat_map(char::to_lowercase);
    let mut needle = match pattern.next() {
        None => return true,
        Some(first) => first,
    };

    for current in text.chars().flat_map(char::to_lowercase) {
        if current == needle {
            needle = match pattern.next() {
                None => return true,
                Some(next) => next,
            };
        }
    }

    false
}

/// A candidate passes when the query is a subsequence of its title or of
/// its body field, each tested independently. A missing body counts as
/// empty text, never as grounds for exclusion on its own.
pub fn matches_candidate(title: &str, body: Option<&str>, query: &str) -> bool {
    is_subsequence_match(title, query) || is_subsequence_match(body.unwrap_or_default(), query)
}
