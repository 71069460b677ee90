// src/domain/search.rs

use url::form_urlencoded;

use crate::domain::category::{PropertyType, TransactionType};
use crate::domain::listing::{Currency, ListingRecord};
use crate::forms::FormData;

pub const PAGE_SIZE: u32 = 20;

/// Listing search criteria. Built once per request and handed whole to
/// `db::listings::search_listings`; every `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub search: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub property_type: Option<PropertyType>,
    pub transaction_type: Option<TransactionType>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    /// Minimum number of bedrooms.
    pub bedrooms: Option<i64>,
    pub currency: Option<Currency>,
}

impl ListingFilter {
    pub fn from_query(query: Option<&str>) -> Self {
        Self::from_form(&FormData::parse(query.unwrap_or_default()))
    }

    pub fn from_form(form: &FormData) -> Self {
        Self {
            search: form.get("search").map(str::to_string),
            city: form.get("city").map(str::to_string),
            state: form.get("state").map(str::to_string),
            property_type: form.get("property_type").and_then(PropertyType::parse),
            transaction_type: form.get("transaction_type").and_then(TransactionType::parse),
            price_min: form.get_i64("price_min").filter(|v| *v > 0),
            price_max: form.get_i64("price_max").filter(|v| *v > 0),
            bedrooms: form.get_i64("bedrooms").filter(|v| *v > 0),
            currency: form.get("currency").and_then(Currency::parse),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Query-string pairs that reproduce this filter (used by pagination links).
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(v) = &self.search {
            out.push(("search", v.clone()));
        }
        if let Some(v) = &self.city {
            out.push(("city", v.clone()));
        }
        if let Some(v) = &self.state {
            out.push(("state", v.clone()));
        }
        if let Some(v) = self.property_type {
            out.push(("property_type", v.code().to_string()));
        }
        if let Some(v) = self.transaction_type {
            out.push(("transaction_type", v.code().to_string()));
        }
        if let Some(v) = self.price_min {
            out.push(("price_min", v.to_string()));
        }
        if let Some(v) = self.price_max {
            out.push(("price_max", v.to_string()));
        }
        if let Some(v) = self.bedrooms {
            out.push(("bedrooms", v.to_string()));
        }
        if let Some(v) = self.currency {
            out.push(("currency", v.code().to_string()));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Newest, SortOrder::PriceAsc, SortOrder::PriceDesc];

    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Newest => "created_at",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::PriceDesc => "price_desc",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "created_at" | "newest" => Some(SortOrder::Newest),
            "price_asc" => Some(SortOrder::PriceAsc),
            "price_desc" => Some(SortOrder::PriceDesc),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Más Recientes",
            SortOrder::PriceAsc => "Precio: Menor a Mayor",
            SortOrder::PriceDesc => "Precio: Mayor a Menor",
        }
    }

    pub(crate) fn order_by(&self) -> &'static str {
        match self {
            SortOrder::Newest => "created_at DESC, id DESC",
            SortOrder::PriceAsc => "price ASC, id DESC",
            SortOrder::PriceDesc => "price DESC, id DESC",
        }
    }
}

/// One page of search results plus the unpaged match count.
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    pub listings: Vec<ListingRecord>,
    pub total: i64,
}

/// 1-based page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 1,
            size: PAGE_SIZE,
        }
    }
}

impl Page {
    pub fn new(number: u32) -> Self {
        Self {
            number: number.max(1),
            size: PAGE_SIZE,
        }
    }

    pub fn from_form(form: &FormData) -> Self {
        let number = form
            .get("page")
            .and_then(|p| p.parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(number)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.number.saturating_sub(1)) * i64::from(self.size)
    }

    pub fn total_pages(&self, total: i64) -> u32 {
        if total <= 0 {
            return 0;
        }
        let size = i64::from(self.size.max(1));
        u32::try_from((total + size - 1) / size).unwrap_or(u32::MAX)
    }

    /// Index range shown as "Mostrando a - b de total".
    pub fn shown_range(&self, shown: usize, total: i64) -> (i64, i64) {
        if shown == 0 {
            return (0, 0);
        }
        let first = self.offset() + 1;
        let last = (i64::from(self.number) * i64::from(self.size)).min(total);
        (first, last)
    }
}

/// Append `page=n` to a base path plus filter pairs.
pub fn page_href(path: &str, pairs: &[(&str, String)], sort: SortOrder, page: u32) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        ser.append_pair(k, v);
    }
    if sort != SortOrder::Newest {
        ser.append_pair("sort", sort.code());
    }
    ser.append_pair("page", &page.to_string());
    format!("{path}?{}", ser.finish())
}
