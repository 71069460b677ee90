use chrono::{NaiveDateTime, Utc};
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

use crate::db::connection::Database;
use crate::domain::category::{PropertyType, TransactionType};
use crate::domain::listing::{Currency, ListingRecord, ListingStatus};
use crate::domain::publish::NewListing;
use crate::domain::search::{ListingFilter, ListingPage, Page, SortOrder};
use crate::errors::ServerError;

pub(crate) const LISTING_COLUMNS: &str = "id, owner_id, title, description, price, currency, \
     property_type, transaction_type, bedrooms, bathrooms, area_m2, city, state, address, \
     latitude, longitude, images, features, status, featured, created_at, updated_at";

fn db_err(e: rusqlite::Error) -> ServerError {
    ServerError::DbError(e.to_string())
}

fn parse_col<T>(row: &Row, idx: usize, parse: fn(&str) -> Option<T>) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    parse(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("unexpected value {raw:?}").into(),
        )
    })
}

fn json_col(row: &Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Map a row selected with [`LISTING_COLUMNS`].
pub(crate) fn row_to_listing(row: &Row) -> rusqlite::Result<ListingRecord> {
    Ok(ListingRecord {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        price: row.get(4)?,
        currency: parse_col(row, 5, Currency::parse)?,
        property_type: parse_col(row, 6, PropertyType::parse)?,
        transaction_type: parse_col(row, 7, TransactionType::parse)?,
        bedrooms: row.get(8)?,
        bathrooms: row.get(9)?,
        area_m2: row.get(10)?,
        city: row.get(11)?,
        state: row.get(12)?,
        address: row.get(13)?,
        latitude: row.get(14)?,
        longitude: row.get(15)?,
        images: json_col(row, 16)?,
        features: json_col(row, 17)?,
        status: parse_col(row, 18, ListingStatus::parse)?,
        featured: row.get(19)?,
        created_at: row.get(20)?,
        updated_at: row.get(21)?,
    })
}

/// `%term%` with LIKE wildcards in the term escaped by `\`.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// WHERE clause plus positional args for a filter. Only active listings match.
fn filter_clause(filter: &ListingFilter) -> (String, Vec<Value>) {
    let mut clauses: Vec<&str> = vec!["status = 'active'"];
    let mut args: Vec<Value> = Vec::new();

    if let Some(city) = &filter.city {
        clauses.push("city LIKE ? ESCAPE '\\'");
        args.push(Value::Text(like_pattern(city)));
    }
    if let Some(state) = &filter.state {
        clauses.push("state LIKE ? ESCAPE '\\'");
        args.push(Value::Text(like_pattern(state)));
    }
    if let Some(t) = filter.property_type {
        clauses.push("property_type = ?");
        args.push(Value::Text(t.code().into()));
    }
    if let Some(t) = filter.transaction_type {
        clauses.push("transaction_type = ?");
        args.push(Value::Text(t.code().into()));
    }
    if let Some(min) = filter.price_min {
        clauses.push("price >= ?");
        args.push(Value::Integer(min));
    }
    if let Some(max) = filter.price_max {
        clauses.push("price <= ?");
        args.push(Value::Integer(max));
    }
    if let Some(beds) = filter.bedrooms {
        clauses.push("bedrooms >= ?");
        args.push(Value::Integer(beds));
    }
    if let Some(c) = filter.currency {
        clauses.push("currency = ?");
        args.push(Value::Text(c.code().into()));
    }
    if let Some(q) = &filter.search {
        clauses.push(
            "(title LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\' OR address LIKE ? ESCAPE '\\')",
        );
        let pattern = like_pattern(q);
        for _ in 0..3 {
            args.push(Value::Text(pattern.clone()));
        }
    }

    (clauses.join(" AND "), args)
}

/// Filtered, sorted, paged search over active listings.
pub fn search_listings(
    db: &Database,
    filter: &ListingFilter,
    sort: SortOrder,
    page: Page,
) -> Result<ListingPage, ServerError> {
    let (where_sql, mut args) = filter_clause(filter);

    db.with_conn(|conn| {
        let total: i64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM listings WHERE {where_sql}"),
                params_from_iter(args.iter()),
                |r| r.get(0),
            )
            .map_err(db_err)?;

        args.push(Value::Integer(i64::from(page.size)));
        args.push(Value::Integer(page.offset()));

        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE {where_sql} ORDER BY {} LIMIT ? OFFSET ?",
            sort.order_by()
        );
        let mut stmt = conn.prepare(&sql).map_err(db_err)?;
        let listings = stmt
            .query_map(params_from_iter(args.iter()), row_to_listing)
            .map_err(db_err)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(db_err)?;

        Ok(ListingPage { listings, total })
    })
}

fn list_where(db: &Database, where_sql: &str, limit: i64) -> Result<Vec<ListingRecord>, ServerError> {
    db.with_conn(|conn| {
        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE {where_sql} \
             ORDER BY created_at DESC, id DESC LIMIT ?"
        );
        let mut stmt = conn.prepare(&sql).map_err(db_err)?;
        let rows = stmt
            .query_map(params![limit], row_to_listing)
            .map_err(db_err)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(db_err)?;
        Ok(rows)
    })
}

pub fn featured_listings(db: &Database, limit: i64) -> Result<Vec<ListingRecord>, ServerError> {
    list_where(db, "status = 'active' AND featured = 1", limit)
}

pub fn recent_listings(db: &Database, limit: i64) -> Result<Vec<ListingRecord>, ServerError> {
    list_where(db, "status = 'active'", limit)
}

/// An active listing by id.
pub fn get_listing(db: &Database, id: i64) -> Result<ListingRecord, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            &format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ? AND status = 'active'"),
            params![id],
            row_to_listing,
        )
        .optional()
        .map_err(db_err)?
        .ok_or(ServerError::NotFound)
    })
}

pub fn insert_listing(
    db: &Database,
    owner_id: i64,
    listing: &NewListing,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    let images = serde_json::to_string(&listing.images)
        .map_err(|e| ServerError::DbError(format!("encode images failed: {e}")))?;
    let features = serde_json::to_string(&listing.features)
        .map_err(|e| ServerError::DbError(format!("encode features failed: {e}")))?;

    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO listings (owner_id, title, description, price, currency, property_type,
                transaction_type, bedrooms, bathrooms, area_m2, city, state, address,
                images, features, status, featured, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'active', 0, ?, ?)",
            params![
                owner_id,
                listing.title,
                listing.description,
                listing.price,
                listing.currency.code(),
                listing.property_type.code(),
                listing.transaction_type.code(),
                listing.bedrooms,
                listing.bathrooms,
                listing.area_m2,
                listing.city,
                listing.state,
                listing.address,
                images,
                features,
                now,
                now,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("insert listing failed: {e}")))?;
        Ok(conn.last_insert_rowid())
    })
}

/// All of a user's listings, any status unless `status` narrows it.
pub fn listings_by_owner(
    db: &Database,
    owner_id: i64,
    status: Option<ListingStatus>,
) -> Result<Vec<ListingRecord>, ServerError> {
    db.with_conn(|conn| {
        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM listings
             WHERE owner_id = ?1 AND (?2 IS NULL OR status = ?2)
             ORDER BY created_at DESC, id DESC"
        );
        let mut stmt = conn.prepare(&sql).map_err(db_err)?;
        let rows = stmt
            .query_map(params![owner_id, status.map(|s| s.code())], row_to_listing)
            .map_err(db_err)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(db_err)?;
        Ok(rows)
    })
}

/// Status of a listing the user owns. NotFound otherwise.
pub fn owned_listing_status(
    db: &Database,
    owner_id: i64,
    id: i64,
) -> Result<ListingStatus, ServerError> {
    db.with_conn(|conn| {
        let raw: Option<String> = conn
            .query_row(
                "SELECT status FROM listings WHERE id = ? AND owner_id = ?",
                params![id, owner_id],
                |r| r.get(0),
            )
            .optional()
            .map_err(db_err)?;
        raw.as_deref()
            .and_then(ListingStatus::parse)
            .ok_or(ServerError::NotFound)
    })
}

pub fn set_listing_status(
    db: &Database,
    owner_id: i64,
    id: i64,
    status: ListingStatus,
) -> Result<(), ServerError> {
    let now = Utc::now().naive_utc();
    db.with_conn(|conn| {
        let n = conn
            .execute(
                "UPDATE listings SET status = ?, updated_at = ? WHERE id = ? AND owner_id = ?",
                params![status.code(), now, id, owner_id],
            )
            .map_err(db_err)?;
        if n == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}

pub fn delete_listing(db: &Database, owner_id: i64, id: i64) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let n = conn
            .execute(
                "DELETE FROM listings WHERE id = ? AND owner_id = ?",
                params![id, owner_id],
            )
            .map_err(db_err)?;
        if n == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}
