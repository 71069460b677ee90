pub mod components;
pub mod layouts;
pub mod pages;

use crate::auth::CurrentUser;

pub use layouts::desktop::desktop_layout;

/// Per-request values every full page needs.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub base_url: &'a str,
    pub user: Option<&'a CurrentUser>,
}
