/// Derive a safe attachment filename from an external order identifier.
///
/// Keeps ASCII letters, digits, `-`, `_`, and `.`; collapses whitespace runs
/// to a single `_`; falls back to `supplier_order` when the identifier is
/// empty or reduces to nothing; and guarantees a `.pdf` extension.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.trim();
    let base = if base.is_empty() { "supplier_order" } else { base };

    let mut safe = String::with_capacity(base.len());
    let mut pending_separator = false;
    for c in base.chars() {
        if c.is_whitespace() {
            pending_separator = !safe.is_empty();
        } else if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
            if pending_separator {
                safe.push('_');
                pending_separator = false;
            }
            safe.push(c);
        }
    }

    if safe.is_empty() {
        safe.push_str("supplier_order");
    }
    if !safe.to_lowercase().ends_with(".pdf") {
        safe.push_str(".pdf");
    }
    safe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_order_number() {
        assert_eq!(sanitize_filename("B-2026-042"), "B-2026-042.pdf");
    }

    #[test]
    fn whitespace_becomes_underscore() {
        assert_eq!(sanitize_filename("order 42 final"), "order_42_final.pdf");
    }

    #[test]
    fn unsafe_characters_are_stripped() {
        assert_eq!(sanitize_filename("a/b:c*d?"), "abcd.pdf");
    }

    #[test]
    fn empty_falls_back() {
        assert_eq!(sanitize_filename(""), "supplier_order.pdf");
        assert_eq!(sanitize_filename("   "), "supplier_order.pdf");
        assert_eq!(sanitize_filename("///"), "supplier_order.pdf");
    }

    #[test]
    fn existing_extension_is_kept() {
        assert_eq!(sanitize_filename("order.pdf"), "order.pdf");
        assert_eq!(sanitize_filename("ORDER.PDF"), "ORDER.PDF");
    }
}
