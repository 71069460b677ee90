// src/db/users.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
}

pub fn get_user(conn: &Connection, user_id: i64) -> Result<Option<UserProfile>, ServerError> {
    conn.query_row(
        "select id, email, full_name, phone, city from users where id = ?",
        params![user_id],
        |r| {
            Ok(UserProfile {
                id: r.get(0)?,
                email: r.get(1)?,
                full_name: r.get(2)?,
                phone: r.get(3)?,
                city: r.get(4)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}

/// Registration details. Only non-empty values overwrite what is stored.
pub fn update_profile(
    conn: &Connection,
    user_id: i64,
    full_name: Option<&str>,
    phone: Option<&str>,
    city: Option<&str>,
) -> Result<(), ServerError> {
    conn.execute(
        "update users set
            full_name = coalesce(?, full_name),
            phone     = coalesce(?, phone),
            city      = coalesce(?, city)
         where id = ?",
        params![full_name, phone, city, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update profile failed: {e}")))?;
    Ok(())
}
