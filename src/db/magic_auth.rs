use crate::auth::magic::{IssuedMagicLink, MagicLinkConfig, MagicLinkService};
use crate::auth::sessions::create_session;
use crate::db::connection::Database;
use crate::db::users::update_profile;
use crate::errors::ServerError;

/// Optional details captured by the registration form.
#[derive(Debug, Clone, Default)]
pub struct Registration<'a> {
    pub full_name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub city: Option<&'a str>,
}

/// Request a magic link: creates the user on first sight, stores any
/// registration details, inserts the link. The raw token is returned so the
/// caller can mail or log it.
pub fn request_magic_link(
    db: &Database,
    email: &str,
    registration: &Registration<'_>,
    now: i64,
) -> Result<IssuedMagicLink, ServerError> {
    let svc = MagicLinkService::new(MagicLinkConfig::default());
    db.with_conn(|conn| {
        let issued = svc.request_link(conn, email, now)?;
        update_profile(
            conn,
            issued.user_id,
            registration.full_name,
            registration.phone,
            registration.city,
        )?;
        Ok(issued)
    })
}

/// Redeem a link (single use) and open a session. Returns the raw session
/// token for the cookie.
pub fn redeem_magic_link(db: &Database, token: &str, now: i64) -> Result<String, ServerError> {
    let svc = MagicLinkService::new(MagicLinkConfig::default());

    db.with_conn(|conn| {
        let redeemed = svc.redeem(conn, token, now)?;
        tracing::info!(user_id = redeemed.user_id, email = %redeemed.email, "magic link redeemed");
        create_session(conn, redeemed.user_id, now)
    })
}
