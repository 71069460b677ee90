use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

fn with_type(content_type: &str, body: String) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

pub fn xml_response(body: String) -> ResultResp {
    with_type("application/xml; charset=utf-8", body)
}

pub fn text_response(body: String) -> ResultResp {
    with_type("text/plain; charset=utf-8", body)
}

/// 303 See Other, so a POST is followed by a GET.
pub fn redirect(location: &str) -> ResultResp {
    redirect_with_cookie(location, None)
}

pub fn redirect_with_cookie(location: &str, set_cookie: Option<&str>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(303)
        .header("Location", location);
    if let Some(cookie) = set_cookie {
        builder = builder.header("Set-Cookie", cookie);
    }
    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
