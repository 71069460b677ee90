// src/db/favorites.rs
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;

use crate::db::listings::{row_to_listing, LISTING_COLUMNS};
use crate::domain::category::PropertyType;
use crate::domain::listing::ListingRecord;
use crate::domain::search::SortOrder;
use crate::errors::ServerError;

/// Set the favorite flag for (user, listing) to `desired`. Idempotent.
/// Fails with NotFound when the listing does not exist.
pub fn set_favorite(
    conn: &Connection,
    user_id: i64,
    listing_id: i64,
    desired: bool,
    now: i64,
) -> Result<(), ServerError> {
    if desired {
        let exists: Option<i64> = conn
            .query_row(
                "select id from listings where id = ?",
                params![listing_id],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("select listing failed: {e}")))?;
        if exists.is_none() {
            return Err(ServerError::NotFound);
        }
        conn.execute(
            "insert or ignore into favorites (user_id, listing_id, created_at) values (?, ?, ?)",
            params![user_id, listing_id, now],
        )
        .map_err(|e| ServerError::DbError(format!("insert favorite failed: {e}")))?;
    } else {
        conn.execute(
            "delete from favorites where user_id = ? and listing_id = ?",
            params![user_id, listing_id],
        )
        .map_err(|e| ServerError::DbError(format!("delete favorite failed: {e}")))?;
    }
    Ok(())
}

pub fn is_favorite(conn: &Connection, user_id: i64, listing_id: i64) -> Result<bool, ServerError> {
    conn.query_row(
        "select exists(select 1 from favorites where user_id = ? and listing_id = ?)",
        params![user_id, listing_id],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select favorite failed: {e}")))
}

/// Listing ids the user has favorited, for marking cards.
pub fn favorite_ids(conn: &Connection, user_id: i64) -> Result<HashSet<i64>, ServerError> {
    let mut stmt = conn
        .prepare("select listing_id from favorites where user_id = ?")
        .map_err(|e| ServerError::DbError(e.to_string()))?;
    let ids = stmt
        .query_map(params![user_id], |r| r.get(0))
        .map_err(|e| ServerError::DbError(e.to_string()))?
        .collect::<rusqlite::Result<HashSet<i64>>>()
        .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(ids)
}

/// The user's favorited listings. `Newest` means most recently favorited.
pub fn list_favorites(
    conn: &Connection,
    user_id: i64,
    property_type: Option<PropertyType>,
    sort: SortOrder,
) -> Result<Vec<ListingRecord>, ServerError> {
    let order = match sort {
        SortOrder::Newest => "favorited_at DESC, id DESC",
        SortOrder::PriceAsc => "price ASC, id DESC",
        SortOrder::PriceDesc => "price DESC, id DESC",
    };
    let sql = format!(
        "SELECT {LISTING_COLUMNS} FROM (
            SELECT l.*, f.created_at AS favorited_at
            FROM listings l
            JOIN favorites f ON f.listing_id = l.id
            WHERE f.user_id = ?1 AND (?2 IS NULL OR l.property_type = ?2)
         )
         ORDER BY {order}"
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id, property_type.map(|t| t.code())], row_to_listing)
        .map_err(|e| ServerError::DbError(e.to_string()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(rows)
}
