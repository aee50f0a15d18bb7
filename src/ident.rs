//! Resource identifier normalization.
//!
//! Notion accepts page and database IDs with or without hyphens; the API
//! itself is hyphen-agnostic but URLs usually carry the unhyphenated form.
//! Every user-supplied ID is normalized before it reaches the wire.

/// Strips every hyphen from an identifier. Total and idempotent.
pub fn normalize(id: &str) -> String {
    id.replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_hyphens() {
        assert_eq!(normalize("abc-123-def"), "abc123def");
    }

    #[test]
    fn normalize_uuid_form() {
        assert_eq!(
            normalize("59833787-2cf9-4fdf-8782-e53db20768a5"),
            "598337872cf94fdf8782e53db20768a5"
        );
    }

    #[test]
    fn normalize_leaves_clean_ids_alone() {
        assert_eq!(normalize("598337872cf94fdf"), "598337872cf94fdf");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("a-b--c-");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize(""), "");
    }
}
