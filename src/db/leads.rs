// src/db/leads.rs
use rusqlite::{params, Connection};

use crate::domain::lead::NewLead;
use crate::errors::ServerError;

/// Store a contact request. A listing id that no longer exists is dropped.
pub fn insert_lead(conn: &Connection, lead: &NewLead, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert into leads (name, email, phone, message, property_interest, listing_id, created_at)
         values (?1, ?2, ?3, ?4, ?5, (select id from listings where id = ?6), ?7)",
        params![
            lead.name,
            lead.email,
            lead.phone,
            lead.message,
            lead.property_interest,
            lead.listing_id,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert lead failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::{init_db, Database};

    #[test]
    fn stores_lead_and_drops_unknown_listing() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("leads.sqlite3"));
        init_db(&db).unwrap();

        let lead = NewLead {
            name: "Ana".into(),
            email: "ana@mail.com".into(),
            phone: "04141234567".into(),
            message: "Quiero más información".into(),
            property_interest: "Comprar una propiedad".into(),
            listing_id: Some(77),
        };

        let stored: Option<i64> = db
            .with_conn(|conn| {
                let id = insert_lead(conn, &lead, 100)?;
                conn.query_row("select listing_id from leads where id = ?", params![id], |r| r.get(0))
                    .map_err(|e| ServerError::DbError(e.to_string()))
            })
            .unwrap();
        assert_eq!(stored, None);
    }
}
