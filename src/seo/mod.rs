pub mod catalog;
pub mod combinations;
pub mod meta;
pub mod routes;
pub mod sitemap;

pub use combinations::RouteCombination;
pub use meta::PageMeta;
pub use routes::RouteTable;

/// Brand appended to page titles.
pub const SITE_NAME: &str = "Turanchito";
