//! Server-rendered HTML helpers: escaping, the shared page layout and error pages.

use std::fmt::Write as _;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::flash::{FlashLevel, FlashMessage};

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// RFC 3986 unreserved characters stay literal; everything else is encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode `raw` as a single URL path segment, ready for an `href` attribute.
pub fn path_segment(raw: &str) -> String {
    escape(&utf8_percent_encode(raw, PATH_SEGMENT).to_string())
}

/// Render a full page. `body` must already be escaped markup.
pub fn page(title: &str, flashes: &[FlashMessage], body: &str) -> Html<String> {
    let mut notices = String::new();
    for flash in flashes {
        let class = match flash.level {
            FlashLevel::Success => "flash flash-success",
            FlashLevel::Error => "flash flash-error",
        };
        let _ = write!(
            notices,
            r#"<div class="{class}" role="alert">{}</div>"#,
            escape(&flash.text)
        );
    }
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<main>
{notices}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    ))
}

/// Render an error page carrying a machine-readable `kind`.
pub fn error_page(status: StatusCode, kind: &str, message: &str) -> Response {
    let body = format!(
        r#"<h1>{code} {reason}</h1>
<p class="error" data-kind="{kind}">{message}</p>"#,
        code = status.as_u16(),
        reason = escape(status.canonical_reason().unwrap_or("Error")),
        kind = escape(kind),
        message = escape(message),
    );
    (status, page(&status.to_string(), &[], &body)).into_response()
}
