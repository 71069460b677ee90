// src/auth/magic.rs
use crate::errors::ServerError;
use rusqlite::Connection;

use crate::auth::token::{generate_token_default, hash_token};
use crate::db::auth as db_auth;

#[derive(Debug, Clone)]
pub struct MagicLinkConfig {
    /// TTL for magic links in seconds.
    pub ttl_secs: i64,
    /// Relative path used when building links.
    pub magic_path: String,
}

impl Default for MagicLinkConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 15 * 60,
            magic_path: "/auth/magic".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuedMagicLink {
    pub email: String,
    pub user_id: i64,
    /// Raw token. Only its hash is stored.
    pub token: String,
    pub expires_at: i64,
    /// Relative URL like "/auth/magic?token=..."
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct RedeemedMagicLink {
    pub user_id: i64,
    pub email: String,
}

pub struct MagicLinkService {
    cfg: MagicLinkConfig,
}

impl MagicLinkService {
    pub fn new(cfg: MagicLinkConfig) -> Self {
        Self { cfg }
    }

    /// Trim and lowercase, then require `local@domain.tld` with no spaces.
    pub fn normalize_email(email: &str) -> Result<String, ServerError> {
        let e = email.trim().to_lowercase();
        let valid = match e.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !e.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(ServerError::BadRequest("Email inválido".into()));
        }
        Ok(e)
    }

    fn build_link(&self, token: &str) -> String {
        format!("{}?token={}", self.cfg.magic_path, token)
    }

    /// Login and signup share this: the user row is created on first request.
    pub fn request_link(
        &self,
        conn: &Connection,
        email: &str,
        now: i64,
    ) -> Result<IssuedMagicLink, ServerError> {
        let email = Self::normalize_email(email)?;
        let user_id = db_auth::get_or_create_user(conn, &email, now)?;

        let token = generate_token_default();
        let expires_at = now + self.cfg.ttl_secs;
        db_auth::insert_magic_link(conn, user_id, &hash_token(&token), now, expires_at)?;

        Ok(IssuedMagicLink {
            email,
            user_id,
            link: self.build_link(&token),
            token,
            expires_at,
        })
    }

    pub fn redeem(
        &self,
        conn: &mut Connection,
        token: &str,
        now: i64,
    ) -> Result<RedeemedMagicLink, ServerError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ServerError::BadRequest("missing token".into()));
        }

        let Some(user_id) = db_auth::consume_magic_link(conn, &hash_token(token), now)? else {
            return Err(ServerError::Unauthorized("invalid or expired link".into()));
        };

        let email: String = conn
            .query_row(
                "select email from users where id = ?",
                rusqlite::params![user_id],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(format!("select user email failed: {e}")))?;

        Ok(RedeemedMagicLink { user_id, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::{init_db, Database};
    use rusqlite::params;

    fn open_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("magic.sqlite3"));
        init_db(&db).unwrap();
        let conn = Connection::open(db.path()).unwrap();
        (dir, conn)
    }

    fn svc() -> MagicLinkService {
        MagicLinkService::new(MagicLinkConfig {
            ttl_secs: 60,
            magic_path: "/auth/magic".to_string(),
        })
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        let e = MagicLinkService::normalize_email("  Test@Example.COM ").unwrap();
        assert_eq!(e, "test@example.com");
    }

    #[test]
    fn normalize_email_rejects_invalid() {
        for bad in ["", "no-at-symbol", "@example.com", "test@", "a@b", "a b@c.com", "a@@c.com", "a@c."] {
            assert!(MagicLinkService::normalize_email(bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn request_link_creates_user_and_hashed_link() {
        let (_dir, conn) = open_db();
        let now = 1000;
        let issued = svc().request_link(&conn, "User@Example.com", now).unwrap();

        let user_id: i64 = conn
            .query_row(
                "select id from users where email = ?",
                params!["user@example.com"],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(issued.user_id, user_id);

        let token_hash: Vec<u8> = conn
            .query_row(
                "select token_hash from magic_links where user_id = ? order by id desc limit 1",
                params![user_id],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(token_hash.as_slice(), hash_token(&issued.token).as_slice());

        assert!(issued.link.starts_with("/auth/magic?token="));
        assert!(issued.link.ends_with(&issued.token));
        assert_eq!(issued.expires_at, now + 60);
    }

    #[test]
    fn redeem_succeeds_once_then_fails() {
        let (_dir, mut conn) = open_db();
        let service = svc();
        let issued = service.request_link(&conn, "a@b.com", 1000).unwrap();

        let redeemed = service.redeem(&mut conn, &issued.token, 1001).unwrap();
        assert_eq!(redeemed.user_id, issued.user_id);
        assert_eq!(redeemed.email, "a@b.com");

        match service.redeem(&mut conn, &issued.token, 1002) {
            Err(ServerError::Unauthorized(_)) => {}
            other => panic!("expected Unauthorized, got: {:?}", other),
        }
    }

    #[test]
    fn redeem_fails_if_expired() {
        let (_dir, mut conn) = open_db();
        let service = MagicLinkService::new(MagicLinkConfig {
            ttl_secs: 1,
            ..MagicLinkConfig::default()
        });
        let issued = service.request_link(&conn, "x@y.com", 1000).unwrap();

        match service.redeem(&mut conn, &issued.token, 1002) {
            Err(ServerError::Unauthorized(_)) => {}
            other => panic!("expected Unauthorized, got: {:?}", other),
        }
    }

    #[test]
    fn redeem_rejects_missing_token() {
        let (_dir, mut conn) = open_db();
        match svc().redeem(&mut conn, "   ", 1000) {
            Err(ServerError::BadRequest(_)) => {}
            other => panic!("expected BadRequest, got: {:?}", other),
        }
    }
}
