// src/responses/html.rs
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}

pub fn css_response(css: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/css; charset=utf-8")
        .body(Body::from(css.to_string()))
        .unwrap();

    Ok(resp)
}

pub fn redirect(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}

/// Redirect and set/replace the session cookie in one response
/// (login sets it, logout clears it).
pub fn redirect_with_cookie(location: &str, cookie: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .header("Set-Cookie", cookie)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}
