//! HTML pages for the browser form flow.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::notice::common::{escape_html, PDF_MIME_TYPE};
use crate::notice::GeneratedNotice;

pub const FORM_PAGE: &str = include_str!("../../static/form.html");

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ font-family: system-ui, sans-serif; max-width: 52em; margin: 2em auto; padding: 0 1em; }}
  iframe {{ width: 100%; height: 60em; border: 1px solid #ccc; }}
  .error {{ color: #a00; white-space: pre-wrap; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

/// Inline preview of the rendered notice plus a download link.
///
/// The PDF travels inside a data URI so the download always matches the
/// preview shown next to it.
pub fn result_page(notice: &GeneratedNotice) -> String {
    let body = format!(
        r#"<h1>Generated Eviction Notice</h1>
<iframe title="Eviction notice preview" srcdoc="{preview}"></iframe>
<p><a download="{filename}" href="data:{mime};base64,{pdf}">Download Eviction Notice as PDF</a></p>
<p><a href="/">Create another notice</a></p>"#,
        preview = escape_html(&notice.html),
        filename = escape_html(&notice.filename),
        mime = PDF_MIME_TYPE,
        pdf = STANDARD.encode(&notice.pdf),
    );
    page("Generated Eviction Notice", &body)
}

/// Failure report. Never carries a download link.
pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"<h1>Could not generate the eviction notice</h1>
<p class="error">{message}</p>
<p><a href="/">Back to the form</a></p>"#,
        message = escape_html(message),
    );
    page("Eviction Notice Error", &body)
}
