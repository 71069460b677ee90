pub mod errors;
pub mod html;
pub mod plain;

pub use crate::errors::ResultResp;
pub use errors::error_response;
pub use html::{html_response, html_with_status};
pub use plain::{redirect, redirect_with_cookie, text_response, xml_response};
