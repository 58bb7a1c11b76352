use genpdf::Mm;

/// Greedy word wrap against an arbitrary width measure.
///
/// Lines break only at word boundaries; a single word wider than
/// `max_width` still gets a line of its own rather than being split.
/// The measure is a closure so the layout can pass real font metrics
/// while tests use a synthetic one.
pub(crate) fn wrap_words<F>(text: &str, max_width: Mm, measure: F) -> Vec<String>
where
    F: Fn(&str) -> Mm,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if measure(&candidate) > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
