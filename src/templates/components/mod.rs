pub mod card;
pub mod contact_form;
pub mod email_cta;
pub mod error;
pub mod favorite;
pub mod pagination;
pub mod search_filters;

pub use card::property_grid;
pub use contact_form::contact_form;
pub use email_cta::email_cta_form;
pub use error::error_page;
pub use favorite::favorite_button;
pub use pagination::pagination;
pub use search_filters::{search_filters, sort_select};
