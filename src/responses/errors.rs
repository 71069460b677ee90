use crate::errors::ServerError;
use crate::responses::{html_with_status, redirect};
use crate::templates::components::error_page;
use astra::{Body, Response};

/// Turn a handler error into the response the visitor sees. Unauthorized
/// sends them to the login page; everything else renders the error page.
pub fn error_response(err: ServerError) -> Response {
    let status = err.status();
    match &err {
        ServerError::Unauthorized(msg) => {
            tracing::debug!("unauthorized: {msg}");
        }
        ServerError::NotFound | ServerError::BadRequest(_) => {
            tracing::debug!(status, "{err}");
        }
        _ => tracing::error!(status, "{err}"),
    }

    let rendered = match err {
        ServerError::Unauthorized(_) => redirect("/login"),
        ServerError::NotFound => html_with_status(404, error_page(404, "Página no encontrada")),
        ServerError::BadRequest(msg) => html_with_status(400, error_page(400, &msg)),
        _ => html_with_status(status, error_page(status, "Ocurrió un error inesperado")),
    };

    rendered.unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
