// src/auth/sessions.rs
use crate::auth::token::{generate_token_default, hash_token};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub const SESSION_COOKIE: &str = "turanchito_session";
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

/// The signed-in user, resolved once per request from the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
}

impl CurrentUser {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

pub fn create_session(conn: &Connection, user_id: i64, now: i64) -> Result<String, ServerError> {
    let raw_token = generate_token_default();

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash_token(&raw_token).as_slice(), now, now + SESSION_TTL_SECS],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<CurrentUser>, ServerError> {
    conn.query_row(
        r#"
        select u.id, u.email, u.full_name
        from sessions s
        join users u on u.id = s.user_id
        where s.token_hash = ?
          and s.expires_at > ?
          and s.revoked_at is null
        "#,
        params![hash_token(raw_token).as_slice(), now],
        |row| {
            Ok(CurrentUser {
                id: row.get(0)?,
                email: row.get(1)?,
                full_name: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash_token(raw_token).as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}

/// Session token from a raw `Cookie` header value.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|v| !v.is_empty())
}

pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}")
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::auth::get_or_create_user;
    use crate::db::connection::{init_db, Database};

    fn open_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("sessions.sqlite3"));
        init_db(&db).unwrap();
        let conn = Connection::open(db.path()).unwrap();
        (dir, conn)
    }

    #[test]
    fn session_round_trip_and_revoke() {
        let (_dir, conn) = open_db();
        let uid = get_or_create_user(&conn, "s@t.com", 0).unwrap();
        let token = create_session(&conn, uid, 100).unwrap();

        let user = load_user_from_session(&conn, &token, 101).unwrap().unwrap();
        assert_eq!(user.id, uid);
        assert_eq!(user.display_name(), "s@t.com");

        assert!(load_user_from_session(&conn, "bogus", 101).unwrap().is_none());

        revoke_session(&conn, &token, 102).unwrap();
        assert!(load_user_from_session(&conn, &token, 103).unwrap().is_none());
    }

    #[test]
    fn session_expires_after_a_week() {
        let (_dir, conn) = open_db();
        let uid = get_or_create_user(&conn, "s@t.com", 0).unwrap();
        let token = create_session(&conn, uid, 0).unwrap();
        assert!(load_user_from_session(&conn, &token, SESSION_TTL_SECS - 1).unwrap().is_some());
        assert!(load_user_from_session(&conn, &token, SESSION_TTL_SECS).unwrap().is_none());
    }

    #[test]
    fn cookie_parsing() {
        let header = format!("theme=dark; {SESSION_COOKIE}=abc-123 ; other=x");
        assert_eq!(token_from_cookie_header(&header), Some("abc-123"));
        assert_eq!(token_from_cookie_header("theme=dark"), None);
        assert_eq!(token_from_cookie_header(&format!("{SESSION_COOKIE}=")), None);
        assert!(session_cookie("tok").contains("HttpOnly"));
    }
}
