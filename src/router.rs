use std::collections::HashSet;
use std::io::Read;

use astra::Request;
use chrono::Utc;

use crate::auth::sessions::{
    clear_session_cookie, load_user_from_session, revoke_session, session_cookie,
    token_from_cookie_header,
};
use crate::auth::CurrentUser;
use crate::config::Config;
use crate::db::favorites::{favorite_ids, is_favorite, list_favorites, set_favorite};
use crate::db::leads::insert_lead;
use crate::db::listings::{
    delete_listing, featured_listings, get_listing, insert_listing, listings_by_owner,
    owned_listing_status, recent_listings, search_listings, set_listing_status,
};
use crate::db::magic_auth::{redeem_magic_link, request_magic_link, Registration};
use crate::db::users::get_user;
use crate::db::Database;
use crate::domain::category::{PropertyType, TransactionType};
use crate::domain::favorite::FavoriteToggle;
use crate::domain::lead::NewLead;
use crate::domain::listing::ListingStatus;
use crate::domain::publish::NewListing;
use crate::domain::search::{ListingFilter, Page, SortOrder};
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::geos::find_city_by_slug;
use crate::mailer::BrevoMailer;
use crate::responses::{
    html_response, html_with_status, redirect, redirect_with_cookie, text_response, xml_response,
    ResultResp,
};
use crate::seo::meta::absolute;
use crate::seo::routes::Route;
use crate::seo::sitemap::{render_sitemap, robots_txt};
use crate::seo::{PageMeta, RouteCombination, RouteTable};
use crate::templates::components::favorite_button;
use crate::templates::pages::{self, HomeVm, LandingVm, PropertyVm, SearchVm};
use crate::templates::PageContext;

const HOME_FEATURED: i64 = 6;
const HOME_RECENT: i64 = 8;

/// Everything a worker needs to answer a request. Built once in `main`.
pub struct AppState {
    pub db: Database,
    pub config: Config,
    pub routes: RouteTable,
    pub mailer: Option<BrevoMailer>,
}

fn now_unix() -> i64 {
    Utc::now().timestamp()
}

fn read_form(req: Request) -> Result<FormData, ServerError> {
    let mut raw = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(FormData::parse(&raw))
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

fn require_user(user: Option<&CurrentUser>) -> Result<&CurrentUser, ServerError> {
    user.ok_or_else(|| ServerError::Unauthorized("sign-in required".into()))
}

fn favorites_for(db: &Database, user: Option<&CurrentUser>) -> Result<Option<HashSet<i64>>, ServerError> {
    match user {
        Some(u) => db.with_conn(|conn| favorite_ids(conn, u.id)).map(Some),
        None => Ok(None),
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let is_htmx = req.headers().contains_key("HX-Request");
    let session_token = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(token_from_cookie_header)
        .map(str::to_string);

    let user = match &session_token {
        Some(token) => state
            .db
            .with_conn(|conn| load_user_from_session(conn, token, now_unix()))?,
        None => None,
    };
    let ctx = PageContext {
        base_url: &state.config.base_url,
        user: user.as_ref(),
    };
    let query = query.as_deref();

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => home(state, &ctx),
        ("GET", ["buscar"]) => search(state, &ctx, query, "/buscar", None),
        ("GET", ["comprar"]) => search(state, &ctx, query, "/comprar", Some(TransactionType::Sale)),
        ("GET", ["alquilar"]) => search(state, &ctx, query, "/alquilar", Some(TransactionType::Rent)),
        ("GET", ["propiedades", id]) => property_detail(state, &ctx, parse_id(id)?),
        ("GET", ["sitemap.xml"]) => xml_response(render_sitemap(&state.config.base_url, &state.routes, None)),
        ("GET", ["robots.txt"]) => text_response(robots_txt(&state.config.base_url)),

        ("GET", ["login"]) => html_response(pages::login_page(&ctx)),
        ("GET", ["registro"]) => html_response(pages::register_page(&ctx)),
        ("POST", ["login"]) | ("POST", ["registro"]) | ("POST", ["auth", "request-link"]) => {
            request_link(state, &ctx, read_form(req)?, is_htmx)
        }
        ("GET", ["auth", "magic"]) => {
            let form = FormData::parse(query.unwrap_or_default());
            let token = form
                .get("token")
                .ok_or_else(|| ServerError::BadRequest("missing token".into()))?;
            let session = redeem_magic_link(&state.db, token, now_unix())?;
            redirect_with_cookie("/", Some(&session_cookie(&session)))
        }
        ("POST", ["auth", "logout"]) => {
            if let Some(token) = &session_token {
                state
                    .db
                    .with_conn(|conn| revoke_session(conn, token, now_unix()))?;
            }
            redirect_with_cookie("/", Some(&clear_session_cookie()))
        }

        ("GET", ["publicar"]) => {
            require_user(ctx.user)?;
            html_response(pages::publish_page(&ctx, &FormData::default(), &[]))
        }
        ("POST", ["publicar"]) => {
            let owner = require_user(ctx.user)?;
            let form = read_form(req)?;
            match NewListing::from_form(&form) {
                Ok(listing) => {
                    let id = insert_listing(&state.db, owner.id, &listing, Utc::now().naive_utc())?;
                    tracing::info!(listing_id = id, owner_id = owner.id, "listing published");
                    redirect(&format!("/propiedades/{id}"))
                }
                Err(errors) => {
                    tracing::warn!(owner_id = owner.id, errors = errors.len(), "publish form rejected");
                    html_with_status(422, pages::publish_page(&ctx, &form, &errors))
                }
            }
        }

        ("GET", ["favoritos"]) => {
            let u = require_user(ctx.user)?;
            let form = FormData::parse(query.unwrap_or_default());
            let type_filter = form.get("property_type").and_then(PropertyType::parse);
            let sort = form.get("sort").and_then(SortOrder::parse).unwrap_or_default();
            let listings = state
                .db
                .with_conn(|conn| list_favorites(conn, u.id, type_filter, sort))?;
            html_response(pages::favorites_page(&ctx, &listings, type_filter, sort))
        }
        ("POST", ["favoritos", id, "toggle"]) => {
            let u = require_user(ctx.user)?;
            toggle_favorite(state, u, parse_id(id)?)
        }

        ("GET", ["mis-propiedades"]) => {
            let u = require_user(ctx.user)?;
            let form = FormData::parse(query.unwrap_or_default());
            let status = form.get("status").and_then(ListingStatus::parse);
            let listings = listings_by_owner(&state.db, u.id, status)?;
            html_response(pages::my_properties_page(&ctx, &listings, status))
        }
        ("POST", ["mis-propiedades", id, "toggle"]) => {
            let u = require_user(ctx.user)?;
            let id = parse_id(id)?;
            let next = match owned_listing_status(&state.db, u.id, id)? {
                ListingStatus::Active => ListingStatus::Inactive,
                _ => ListingStatus::Active,
            };
            set_listing_status(&state.db, u.id, id, next)?;
            redirect("/mis-propiedades")
        }
        ("POST", ["mis-propiedades", id, "delete"]) => {
            let u = require_user(ctx.user)?;
            let id = parse_id(id)?;
            delete_listing(&state.db, u.id, id)?;
            tracing::info!(listing_id = id, owner_id = u.id, "listing deleted");
            redirect("/mis-propiedades")
        }

        ("GET", ["contacto"]) => {
            let mut values = FormData::parse(query.unwrap_or_default());
            if let Some(u) = ctx.user {
                if let Some(profile) = state.db.with_conn(|conn| get_user(conn, u.id))? {
                    values.set_default("email", &profile.email);
                    if let Some(name) = &profile.full_name {
                        values.set_default("name", name);
                    }
                    if let Some(phone) = &profile.phone {
                        values.set_default("phone", phone);
                    }
                }
            }
            html_response(pages::contact_page(&ctx, &values, &[], false))
        }
        ("POST", ["contacto"]) => {
            let form = read_form(req)?;
            match NewLead::from_form(&form) {
                Ok(lead) => {
                    let id = state.db.with_conn(|conn| insert_lead(conn, &lead, now_unix()))?;
                    tracing::info!(lead_id = id, listing_id = ?lead.listing_id, "lead received");
                    html_response(pages::contact_page(&ctx, &FormData::default(), &[], true))
                }
                Err(errors) => {
                    tracing::warn!(errors = errors.len(), "contact form rejected");
                    html_with_status(422, pages::contact_page(&ctx, &form, &errors, false))
                }
            }
        }

        ("GET", [slug]) => match state.routes.resolve(slug) {
            Some(Route::City(city)) => {
                let filter = ListingFilter {
                    city: Some(city.display_name.to_string()),
                    state: Some(city.region.to_string()),
                    ..ListingFilter::default()
                };
                let results = search_listings(
                    &state.db,
                    &filter,
                    SortOrder::Newest,
                    Page::default(),
                )?;
                let combos: Vec<&RouteCombination> = state
                    .routes
                    .combinations()
                    .iter()
                    .filter(|c| c.city_slug == city.url_slug)
                    .collect();
                let favorites = favorites_for(&state.db, ctx.user)?;
                html_response(pages::city_page(
                    &ctx,
                    city,
                    &combos,
                    &results.listings,
                    favorites.as_ref(),
                ))
            }
            Some(Route::Combination(combo)) => landing(state, &ctx, combo, query),
            None => Err(ServerError::NotFound),
        },

        _ => Err(ServerError::NotFound),
    }
}

fn home(state: &AppState, ctx: &PageContext<'_>) -> ResultResp {
    let featured = featured_listings(&state.db, HOME_FEATURED)?;
    let recent = recent_listings(&state.db, HOME_RECENT)?;
    let favorites = favorites_for(&state.db, ctx.user)?;
    html_response(pages::home_page(
        ctx,
        &HomeVm {
            featured: &featured,
            recent: &recent,
            favorites: favorites.as_ref(),
            routes: &state.routes,
        },
    ))
}

fn search(
    state: &AppState,
    ctx: &PageContext<'_>,
    query: Option<&str>,
    path: &str,
    fixed_transaction: Option<TransactionType>,
) -> ResultResp {
    let form = FormData::parse(query.unwrap_or_default());
    let mut filter = ListingFilter::from_form(&form);
    if fixed_transaction.is_some() {
        filter.transaction_type = fixed_transaction;
    }
    let sort = form.get("sort").and_then(SortOrder::parse).unwrap_or_default();
    let page = Page::from_form(&form);

    let results = search_listings(&state.db, &filter, sort, page)?;
    let favorites = favorites_for(&state.db, ctx.user)?;

    let (heading, meta) = match fixed_transaction {
        Some(TransactionType::Sale) => (
            "Propiedades en venta",
            PageMeta::page("Propiedades en venta en Venezuela", path)
                .with_description("Casas, apartamentos, locales y terrenos en venta en toda Venezuela."),
        ),
        Some(TransactionType::Rent) => (
            "Propiedades en alquiler",
            PageMeta::page("Propiedades en alquiler en Venezuela", path)
                .with_description("Casas, apartamentos, locales y terrenos en alquiler en toda Venezuela."),
        ),
        None => ("Buscar propiedades", PageMeta::page("Buscar propiedades", path)),
    };

    html_response(pages::search_page(
        ctx,
        &meta,
        &SearchVm {
            heading,
            path,
            filter: &filter,
            sort,
            page,
            results: &results,
            favorites: favorites.as_ref(),
            fixed_transaction,
        },
    ))
}

fn landing(
    state: &AppState,
    ctx: &PageContext<'_>,
    combo: &RouteCombination,
    query: Option<&str>,
) -> ResultResp {
    let form = FormData::parse(query.unwrap_or_default());
    let sort = form.get("sort").and_then(SortOrder::parse).unwrap_or_default();
    let page = Page::from_form(&form);

    let filter = ListingFilter {
        city: Some(combo.city.clone()),
        state: Some(combo.region.clone()),
        property_type: Some(combo.property_type),
        transaction_type: Some(combo.transaction_type),
        ..ListingFilter::default()
    };
    let results = search_listings(&state.db, &filter, sort, page)?;
    let favorites = favorites_for(&state.db, ctx.user)?;

    let related: Vec<&RouteCombination> = state
        .routes
        .combinations()
        .iter()
        .filter(|c| c.city_slug == combo.city_slug && c.route_slug != combo.route_slug)
        .collect();

    html_response(pages::landing_page(
        ctx,
        &LandingVm {
            combo,
            related: &related,
            results: &results,
            sort,
            page,
            favorites: favorites.as_ref(),
        },
    ))
}

fn property_detail(state: &AppState, ctx: &PageContext<'_>, id: i64) -> ResultResp {
    let listing = get_listing(&state.db, id)?;
    let combo = state
        .routes
        .cities()
        .iter()
        .find(|c| c.display_name == listing.city && c.region == listing.state)
        .and_then(|c| state.routes.find(c.url_slug, listing.property_type, listing.transaction_type));
    let favorited = match ctx.user {
        Some(u) => Some(state.db.with_conn(|conn| is_favorite(conn, u.id, id))?),
        None => None,
    };

    html_response(pages::property_page(
        ctx,
        &PropertyVm {
            listing: &listing,
            combo,
            favorited,
        },
    ))
}

/// Run one favorite toggle through the state machine and answer with the
/// re-rendered button. A failed write rolls the button back.
fn toggle_favorite(state: &AppState, user: &CurrentUser, listing_id: i64) -> ResultResp {
    let current = state
        .db
        .with_conn(|conn| is_favorite(conn, user.id, listing_id))?;
    let mut toggle = FavoriteToggle::confirmed(listing_id, current);
    let desired = toggle.begin().map_err(|_| ServerError::InternalError)?;

    let settled = match state
        .db
        .with_conn(|conn| set_favorite(conn, user.id, listing_id, desired, now_unix()))
    {
        Ok(()) => toggle.confirm(),
        Err(e) => {
            tracing::warn!(listing_id, user_id = user.id, "favorite update failed: {e}");
            toggle.fail("No se pudo actualizar favoritos")
        }
    };
    settled.map_err(|_| ServerError::InternalError)?;

    html_response(favorite_button(&toggle))
}

fn request_link(
    state: &AppState,
    ctx: &PageContext<'_>,
    form: FormData,
    is_htmx: bool,
) -> ResultResp {
    let email = form.get("email").unwrap_or_default();
    let city = form
        .get("city")
        .and_then(find_city_by_slug)
        .map(|c| c.display_name);
    let registration = Registration {
        full_name: form.get("full_name"),
        phone: form.get("phone"),
        city,
    };

    let issued = match request_magic_link(&state.db, email, &registration, now_unix()) {
        Ok(issued) => issued,
        Err(ServerError::BadRequest(msg)) if is_htmx => {
            return html_response(pages::auth_error_content(&msg));
        }
        Err(e) => return Err(e),
    };

    let link = absolute(&state.config.base_url, &issued.link);
    match &state.mailer {
        Some(mailer) => {
            if let Err(e) = mailer.send_magic_link(&issued.email, &link) {
                tracing::error!(user_id = issued.user_id, "magic link email failed: {e}");
                return Err(ServerError::InternalError);
            }
            tracing::info!(user_id = issued.user_id, expires_at = issued.expires_at, "magic link sent");
        }
        None => tracing::info!(email = %issued.email, %link, "mailer not configured, magic link"),
    }

    if is_htmx {
        html_response(pages::check_email_content(&issued.email))
    } else {
        html_response(pages::check_email_page(ctx, &issued.email))
    }
}
