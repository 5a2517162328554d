//! Slug helpers.

/// Derive a slug from free text: lowercase ASCII alphanumerics, with every run
/// of other characters collapsed to a single `-` and no leading or trailing `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// The `n`th collision candidate for `base`, e.g. `joes-diner-2`.
pub fn with_suffix(base: &str, n: u32) -> String {
    format!("{base}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Joe's Diner"), "joe-s-diner");
        assert_eq!(slugify("  Café  Luna!! "), "caf-luna");
        assert_eq!(slugify("PIZZA 4 U"), "pizza-4-u");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_with_suffix() {
        assert_eq!(with_suffix("joes-diner", 2), "joes-diner-2");
        assert_eq!(with_suffix("joes-diner", 13), "joes-diner-13");
    }
}
