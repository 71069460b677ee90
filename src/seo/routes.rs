// src/seo/routes.rs
//! Exact-match route table for the city pages and combination pages.
//!
//! Slugs contain hyphens on every side of the join word, so a path is never
//! split apart; it is looked up verbatim in a map built from the same
//! generated combination list that the sitemap and the route export use.

use std::collections::HashMap;

use crate::domain::category::{
    PropertyCategory, PropertyType, TransactionCategory, TransactionType, PROPERTY_CATEGORIES,
    TRANSACTION_CATEGORIES,
};
use crate::geos::{CityEntry, VENEZUELAN_CITIES};
use crate::seo::catalog::CatalogError;
use crate::seo::combinations::{generate_combinations, RouteCombination};

/// Top-level paths served by fixed handlers. City and combination slugs
/// must never shadow them.
pub const RESERVED_PATHS: &[&str] = &[
    "buscar",
    "comprar",
    "alquilar",
    "contacto",
    "login",
    "registro",
    "publicar",
    "favoritos",
    "mis-propiedades",
    "propiedades",
    "auth",
    "static",
    "sitemap.xml",
    "robots.txt",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    City(usize),
    Combination(usize),
}

/// What a dynamic path resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    City(&'a CityEntry),
    Combination(&'a RouteCombination),
}

#[derive(Debug)]
pub struct RouteTable {
    cities: Vec<CityEntry>,
    combinations: Vec<RouteCombination>,
    index: HashMap<String, Target>,
}

impl RouteTable {
    /// Build from the shipped reference tables.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::build(VENEZUELAN_CITIES, PROPERTY_CATEGORIES, TRANSACTION_CATEGORIES)
    }

    pub fn build(
        cities: &[CityEntry],
        properties: &[PropertyCategory],
        transactions: &[TransactionCategory],
    ) -> Result<Self, CatalogError> {
        let combinations = generate_combinations(cities, properties, transactions)?;

        let mut index = HashMap::with_capacity(cities.len() + combinations.len());
        for (i, c) in cities.iter().enumerate() {
            Self::register(&mut index, c.url_slug, Target::City(i))?;
        }
        for (i, c) in combinations.iter().enumerate() {
            Self::register(&mut index, &c.route_slug, Target::Combination(i))?;
        }

        Ok(Self {
            cities: cities.to_vec(),
            combinations,
            index,
        })
    }

    fn register(
        index: &mut HashMap<String, Target>,
        slug: &str,
        target: Target,
    ) -> Result<(), CatalogError> {
        if RESERVED_PATHS.contains(&slug) || index.insert(slug.to_string(), target).is_some() {
            return Err(CatalogError::RouteCollision {
                slug: slug.to_string(),
            });
        }
        Ok(())
    }

    /// Resolve a path slug (without the leading '/') by exact lookup.
    pub fn resolve(&self, slug: &str) -> Option<Route<'_>> {
        match self.index.get(slug)? {
            Target::City(i) => self.cities.get(*i).map(Route::City),
            Target::Combination(i) => self.combinations.get(*i).map(Route::Combination),
        }
    }

    /// Combination for a (city, property, transaction) triple, if it exists.
    pub fn find(
        &self,
        city_slug: &str,
        property: PropertyType,
        transaction: TransactionType,
    ) -> Option<&RouteCombination> {
        self.combinations.iter().find(|c| {
            c.city_slug == city_slug
                && c.property_type == property
                && c.transaction_type == transaction
        })
    }

    pub fn combinations(&self) -> &[RouteCombination] {
        &self.combinations
    }

    pub fn cities(&self) -> &[CityEntry] {
        &self.cities
    }

    /// Number of dynamic routes (city pages + combination pages).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
