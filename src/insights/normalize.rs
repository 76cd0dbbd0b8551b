//! Item name normalization
//!
//! Grocery names are typed by hand, so "Tomates", " tomates " and
//! "TOMATES" must collapse to one entity before any item-level
//! aggregation. Supplier names are compared verbatim.

/// Placeholder reported when a purchase has no supplier name
pub const UNKNOWN_SUPPLIER: &str = "Inconnu";

/// Join key for item-level aggregations: trimmed and lower-cased
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Presentation form of a normalized name: first character upper-cased
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Supplier to report for a purchase
pub fn supplier_or_unknown(supplier: Option<&str>) -> String {
    supplier.unwrap_or(UNKNOWN_SUPPLIER).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_case_and_whitespace() {
        assert_eq!(normalize_name("Tomates"), "tomates");
        assert_eq!(normalize_name(" tomates "), "tomates");
        assert_eq!(normalize_name("TOMATES"), "tomates");
        assert_eq!(normalize_name("  Pommes de terre\t"), "pommes de terre");
    }

    #[test]
    fn test_normalize_keeps_non_latin_names() {
        assert_eq!(normalize_name(" نعناع "), "نعناع");
        assert_eq!(normalize_name("Pêches"), "pêches");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("tomates"), "Tomates");
        assert_eq!(display_name("éponge"), "Éponge");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_supplier_placeholder() {
        assert_eq!(supplier_or_unknown(None), UNKNOWN_SUPPLIER);
        assert_eq!(supplier_or_unknown(Some("Marjane")), "Marjane");
    }
}
