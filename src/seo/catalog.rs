// src/seo/catalog.rs
//! Startup validation of the three reference tables.
//!
//! Route slugs are built by joining table slugs, so a malformed or
//! duplicated table slug would silently produce colliding routes. Every
//! table is checked here before anything is generated.

use std::collections::HashSet;
use thiserror::Error;

use crate::domain::category::{PropertyCategory, TransactionCategory};
use crate::geos::CityEntry;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{table} table is empty")]
    EmptyTable { table: &'static str },

    #[error("invalid slug {slug:?} in {table} table: {reason}")]
    InvalidSlug {
        table: &'static str,
        slug: String,
        reason: &'static str,
    },

    #[error("duplicate slug {slug:?} in {table} table")]
    DuplicateSlug { table: &'static str, slug: String },

    #[error("route slug {slug:?} is produced more than once")]
    RouteCollision { slug: String },
}

/// Slugs are lowercase ASCII letters and digits in hyphen-separated
/// groups: no leading, trailing or doubled hyphens.
pub fn check_slug(slug: &str) -> Result<(), &'static str> {
    if slug.is_empty() {
        return Err("empty");
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("only lowercase ascii letters, digits and '-' are allowed");
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err("leading or trailing hyphen");
    }
    if slug.contains("--") {
        return Err("doubled hyphen");
    }
    Ok(())
}

fn check_table<'a>(
    table: &'static str,
    slugs: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for slug in slugs {
        check_slug(slug).map_err(|reason| CatalogError::InvalidSlug {
            table,
            slug: slug.to_string(),
            reason,
        })?;
        if !seen.insert(slug) {
            return Err(CatalogError::DuplicateSlug {
                table,
                slug: slug.to_string(),
            });
        }
    }
    if seen.is_empty() {
        return Err(CatalogError::EmptyTable { table });
    }
    Ok(())
}

pub fn validate_tables(
    cities: &[CityEntry],
    properties: &[PropertyCategory],
    transactions: &[TransactionCategory],
) -> Result<(), CatalogError> {
    check_table("city", cities.iter().map(|c| c.url_slug))?;
    check_table("property", properties.iter().map(|p| p.url_slug))?;
    check_table("transaction", transactions.iter().map(|t| t.url_slug))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{PROPERTY_CATEGORIES, TRANSACTION_CATEGORIES};
    use crate::geos::VENEZUELAN_CITIES;

    #[test]
    fn shipped_tables_are_valid() {
        validate_tables(VENEZUELAN_CITIES, PROPERTY_CATEGORIES, TRANSACTION_CATEGORIES)
            .expect("reference tables must validate");
    }

    #[test]
    fn shipped_tables_have_no_duplicate_slugs() {
        fn assert_unique(table: &str, mut slugs: Vec<&str>) {
            let n = slugs.len();
            slugs.sort_unstable();
            slugs.dedup();
            assert_eq!(slugs.len(), n, "duplicate slug in {table} table");
        }

        assert_unique("city", VENEZUELAN_CITIES.iter().map(|c| c.url_slug).collect());
        assert_unique("property", PROPERTY_CATEGORIES.iter().map(|p| p.url_slug).collect());
        assert_unique("transaction", TRANSACTION_CATEGORIES.iter().map(|t| t.url_slug).collect());
    }

    #[test]
    fn check_slug_rules() {
        assert!(check_slug("san-juan-morros").is_ok());
        assert!(check_slug("zona-2").is_ok());
        assert_eq!(check_slug(""), Err("empty"));
        assert!(check_slug("Caracas").is_err());
        assert!(check_slug("cúa").is_err());
        assert!(check_slug("los teques").is_err());
        assert!(check_slug("-coro").is_err());
        assert!(check_slug("coro-").is_err());
        assert!(check_slug("la--guaira").is_err());
    }

    #[test]
    fn duplicate_city_slug_is_rejected() {
        let cities = [
            CityEntry {
                display_name: "Santa Rita",
                region: "Zulia",
                url_slug: "santa-rita",
            },
            CityEntry {
                display_name: "Santa Rita",
                region: "Aragua",
                url_slug: "santa-rita",
            },
        ];
        let err = validate_tables(&cities, PROPERTY_CATEGORIES, TRANSACTION_CATEGORIES)
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateSlug {
                table: "city",
                slug: "santa-rita".into()
            }
        );
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = validate_tables(VENEZUELAN_CITIES, &[], TRANSACTION_CATEGORIES).unwrap_err();
        assert_eq!(err, CatalogError::EmptyTable { table: "property" });
    }
}
