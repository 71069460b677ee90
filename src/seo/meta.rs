// src/seo/meta.rs

use serde_json::json;

use crate::domain::listing::ListingRecord;
use crate::domain::logic::{format_price, truncate_description};
use crate::geos::CityEntry;
use crate::seo::combinations::RouteCombination;
use crate::seo::SITE_NAME;

const DEFAULT_DESCRIPTION: &str = "Encuentra casas, apartamentos, locales comerciales y terrenos \
     en venta y alquiler en toda Venezuela. Turanchito es tu plataforma inmobiliaria de confianza.";

/// Everything the layout writes into `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    /// Site-relative path; made absolute by [`absolute`].
    pub canonical_path: String,
    pub image: Option<String>,
    pub json_ld: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, canonical_path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            keywords: None,
            canonical_path: canonical_path.into(),
            image: None,
            json_ld: None,
        }
    }

    /// Title for a plain page: `"{page} | Turanchito"`.
    pub fn page(page: &str, canonical_path: &str) -> Self {
        Self::new(format!("{page} | {SITE_NAME}"), canonical_path)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn for_combination(combo: &RouteCombination) -> Self {
        Self {
            title: combo.title.clone(),
            description: combo.description.clone(),
            keywords: Some(combo.keywords.clone()),
            canonical_path: format!("/{}", combo.route_slug),
            image: None,
            json_ld: None,
        }
    }

    pub fn for_city(city: &CityEntry) -> Self {
        let name = city.display_name;
        let region = city.region;
        Self {
            title: format!("Propiedades en {name}, {region} | {SITE_NAME}"),
            description: format!(
                "Descubre casas, apartamentos, locales comerciales y terrenos en venta y alquiler \
                 en {name}, {region}. Encuentra tu próxima propiedad con {SITE_NAME}."
            ),
            keywords: Some(format!(
                "propiedades en {name}, inmuebles {name}, casas en {name}, apartamentos en {name}, \
                 bienes raíces {region}"
            )),
            canonical_path: format!("/{}", city.url_slug),
            image: None,
            json_ld: None,
        }
    }

    pub fn for_listing(listing: &ListingRecord, base_url: &str) -> Self {
        let price = format_price(listing.price, listing.currency);
        Self {
            title: format!(
                "{} en {} - {price} | {SITE_NAME}",
                listing.property_type.label(),
                listing.city
            ),
            description: truncate_description(&listing.description),
            keywords: None,
            canonical_path: listing.detail_path(),
            image: listing.cover_image().map(str::to_string),
            json_ld: Some(listing_json_ld(listing, base_url)),
        }
    }
}

/// `base_url` + `path` with exactly one slash between them.
pub fn absolute(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// schema.org `RealEstateListing` for the detail page.
fn listing_json_ld(listing: &ListingRecord, base_url: &str) -> String {
    let mut doc = json!({
        "@context": "https://schema.org",
        "@type": "RealEstateListing",
        "name": listing.title,
        "description": listing.description,
        "url": absolute(base_url, &listing.detail_path()),
        "datePosted": listing.created_at.format("%Y-%m-%d").to_string(),
        "dateModified": listing.updated_at.format("%Y-%m-%d").to_string(),
        "image": listing.images,
        "offers": {
            "@type": "Offer",
            "price": listing.price,
            "priceCurrency": listing.currency.code(),
        },
        "address": {
            "@type": "PostalAddress",
            "streetAddress": listing.address,
            "addressLocality": listing.city,
            "addressRegion": listing.state,
            "addressCountry": "VE",
        },
    });
    if let (Some(lat), Some(lng)) = (listing.latitude, listing.longitude) {
        doc["geo"] = json!({
            "@type": "GeoCoordinates",
            "latitude": lat,
            "longitude": lng,
        });
    }
    // `</` would end the surrounding <script> element.
    doc.to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{PropertyType, TransactionType};
    use crate::domain::listing::{Currency, ListingStatus};
    use crate::geos::find_city_by_slug;
    use crate::seo::RouteTable;
    use chrono::NaiveDate;

    fn listing(description: &str) -> ListingRecord {
        let at = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        ListingRecord {
            id: 42,
            owner_id: Some(1),
            title: "Apartamento en Altamira".into(),
            description: description.into(),
            price: 120000,
            currency: Currency::Usd,
            property_type: PropertyType::Apartment,
            transaction_type: TransactionType::Sale,
            bedrooms: Some(2),
            bathrooms: Some(2),
            area_m2: Some(95),
            city: "Caracas".into(),
            state: "Distrito Capital".into(),
            address: "Av. Luis Roche".into(),
            latitude: Some(10.5),
            longitude: Some(-66.85),
            images: vec!["https://img.example/a.jpg".into()],
            features: vec![],
            status: ListingStatus::Active,
            featured: false,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn listing_meta() {
        let m = PageMeta::for_listing(&listing(&"x".repeat(200)), "https://turanchito.com/");
        assert_eq!(
            m.title,
            "Apartamento en Caracas - US$ 120.000 | Turanchito"
        );
        assert_eq!(m.description.chars().count(), 160);
        assert_eq!(m.canonical_path, "/propiedades/42");
        assert_eq!(m.image.as_deref(), Some("https://img.example/a.jpg"));

        let ld: serde_json::Value = serde_json::from_str(m.json_ld.as_deref().unwrap()).unwrap();
        assert_eq!(ld["url"], "https://turanchito.com/propiedades/42");
        assert_eq!(ld["offers"]["priceCurrency"], "USD");
        assert_eq!(ld["geo"]["latitude"], 10.5);
    }

    #[test]
    fn json_ld_cannot_close_script() {
        let m = PageMeta::for_listing(&listing("</script><script>alert(1)"), "https://t.com");
        assert!(!m.json_ld.unwrap().contains("</script>"));
    }

    #[test]
    fn combination_meta_uses_generated_text() {
        let routes = RouteTable::standard().unwrap();
        let combo = routes
            .find("maracay", PropertyType::House, TransactionType::Sale)
            .unwrap();
        let m = PageMeta::for_combination(combo);
        assert_eq!(m.canonical_path, "/venta-casa-en-maracay");
        assert!(m.title.contains("Casa") && m.title.contains("Maracay"));
        assert!(m.keywords.is_some());
    }

    #[test]
    fn city_meta() {
        let m = PageMeta::for_city(find_city_by_slug("maracay").unwrap());
        assert_eq!(m.title, "Propiedades en Maracay, Aragua | Turanchito");
        assert_eq!(m.canonical_path, "/maracay");
    }

    #[test]
    fn absolute_joins_with_one_slash() {
        assert_eq!(absolute("https://a.com/", "/x"), "https://a.com/x");
        assert_eq!(absolute("https://a.com", "x"), "https://a.com/x");
        assert_eq!(absolute("https://a.com", "/"), "https://a.com/");
    }
}
