// src/db/auth.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

/// Magic link row as seen while redeeming it.
struct PendingLink {
    id: i64,
    user_id: i64,
    expires_at: i64,
    used_at: Option<i64>,
}

/// Id of the user with `email`, creating the row on first sight.
/// `email` must already be normalized.
pub fn get_or_create_user(conn: &Connection, email: &str, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert or ignore into users (email, created_at) values (?, ?)",
        params![email, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    let id: i64 = conn
        .query_row(
            "select id from users where email = ?",
            params![email],
            |row| row.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))?;

    Ok(id)
}

/// Store a link by the SHA-256 of its token; the raw token is never kept.
pub fn insert_magic_link(
    conn: &Connection,
    user_id: i64,
    token_hash: &[u8],
    created_at: i64,
    expires_at: i64,
) -> Result<(), ServerError> {
    conn.execute(
        "insert into magic_links (user_id, token_hash, created_at, expires_at) values (?, ?, ?, ?)",
        params![user_id, token_hash, created_at, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert magic link failed: {e}")))?;
    Ok(())
}

/// Mark a link used and return its user. `None` when the hash is unknown,
/// expired or already used. Runs in a transaction so one token yields at
/// most one login.
pub fn consume_magic_link(
    conn: &mut Connection,
    token_hash: &[u8],
    now: i64,
) -> Result<Option<i64>, ServerError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

    let link = tx
        .query_row(
            "select id, user_id, expires_at, used_at from magic_links where token_hash = ?",
            params![token_hash],
            |r| {
                Ok(PendingLink {
                    id: r.get(0)?,
                    user_id: r.get(1)?,
                    expires_at: r.get(2)?,
                    used_at: r.get(3)?,
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select magic link failed: {e}")))?;

    let usable = link.filter(|l| l.used_at.is_none() && l.expires_at > now);
    let Some(link) = usable else {
        return Ok(None);
    };

    // `used_at is null` again so a concurrent redeem cannot also win.
    let updated = tx
        .execute(
            "update magic_links set used_at = ? where id = ? and used_at is null",
            params![now, link.id],
        )
        .map_err(|e| ServerError::DbError(format!("mark magic link used failed: {e}")))?;
    if updated != 1 {
        return Ok(None);
    }

    tx.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, link.user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login_at failed: {e}")))?;

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit tx failed: {e}")))?;

    Ok(Some(link.user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::{init_db, Database};

    fn open_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("auth.sqlite3"));
        init_db(&db).unwrap();
        let conn = Connection::open(db.path()).unwrap();
        (dir, conn)
    }

    #[test]
    fn get_or_create_user_is_idempotent() {
        let (_dir, conn) = open_db();

        let now = 1000;
        let id1 = get_or_create_user(&conn, "test@example.com", now).unwrap();
        let id2 = get_or_create_user(&conn, "test@example.com", now + 1).unwrap();
        assert_eq!(id1, id2);
    }

    #[test]
    fn emails_are_unique_per_user() {
        let (_dir, conn) = open_db();
        let a = get_or_create_user(&conn, "a@b.com", 1).unwrap();
        let b = get_or_create_user(&conn, "b@b.com", 1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn magic_link_insert_and_consume_once() {
        let (_dir, mut conn) = open_db();

        let now = 1000;
        let user_id = get_or_create_user(&conn, "c@d.com", now).unwrap();

        let token_hash = b"fake_hash_32_bytes_len__________"; // just test bytes
        insert_magic_link(&conn, user_id, token_hash, now, now + 900).unwrap();

        let ok = consume_magic_link(&mut conn, token_hash, now + 1).unwrap();
        assert_eq!(ok, Some(user_id));

        let last_login: Option<i64> = conn
            .query_row("select last_login_at from users where id = ?", params![user_id], |r| r.get(0))
            .unwrap();
        assert_eq!(last_login, Some(now + 1));

        // second consume should fail (used)
        let second = consume_magic_link(&mut conn, token_hash, now + 2).unwrap();
        assert_eq!(second, None);
    }

    #[test]
    fn magic_link_expired_cannot_be_consumed() {
        let (_dir, mut conn) = open_db();

        let now = 1000;
        let user_id = get_or_create_user(&conn, "e@f.com", now).unwrap();

        let token_hash = b"another_fake_hash______________";
        insert_magic_link(&conn, user_id, token_hash, now, now + 10).unwrap();

        // after expiry
        let res = consume_magic_link(&mut conn, token_hash, now + 11).unwrap();
        assert_eq!(res, None);
    }
}
