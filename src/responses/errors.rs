// src/responses/errors.rs
use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => html_error_response(404, "Not Found"),
        ServerError::BadRequest(msg) => html_error_response(400, &msg),
        ServerError::Forbidden => {
            html_error_response(403, "Your role does not allow this action")
        }
        ServerError::DbError(msg) => {
            log::error!("database error: {msg}");
            html_error_response(500, "Something went wrong on our side")
        }
        ServerError::InternalError => html_error_response(500, "Internal Server Error"),
    }
}

/// Build a basic HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Error {status}</title>
  <link rel="stylesheet" href="/static/main.css">
</head>
<body>
  <main class="container narrow">
    <h1>Error {status}</h1>
    <p>{message}</p>
    <p><a href="/">&larr; Back to home</a></p>
  </main>
</body>
</html>"#
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap()
}
