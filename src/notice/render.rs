//! HTML rendering of the notice text under the firm letterhead.

use super::common::escape_html;
use super::NoticeError;

const LETTERHEAD_TEMPLATE: &str = include_str!("../../static/letterhead.html");
const PRIMARY_SLOT: &str = "{{LETTERHEAD_PRIMARY}}";
const ACCENT_SLOT: &str = "{{LETTERHEAD_ACCENT}}";
const NOTICE_SLOT: &str = "{{NOTICE_TEXT}}";

pub const DEFAULT_LETTERHEAD_PRIMARY: &str = "xyz";
pub const DEFAULT_LETTERHEAD_ACCENT: &str = " lawfirm";

/// Wraps notice text in the letterhead HTML shell.
///
/// The shell is split around the notice slot once at construction, so
/// rendering is a concatenation and never rescans user text for slots.
#[derive(Debug, Clone)]
pub struct LetterheadRenderer {
    head: String,
    tail: String,
}

impl LetterheadRenderer {
    /// Use the built-in `static/letterhead.html` shell with the two-tone firm label.
    pub fn new(primary: &str, accent: &str) -> Result<Self, NoticeError> {
        Self::from_template(LETTERHEAD_TEMPLATE, primary, accent)
    }

    pub fn from_template(template: &str, primary: &str, accent: &str) -> Result<Self, NoticeError> {
        let (head, tail) = template
            .split_once(NOTICE_SLOT)
            .ok_or(NoticeError::TemplateSlot(NOTICE_SLOT))?;

        let fill = |part: &str| {
            part.replace(PRIMARY_SLOT, &escape_html(primary))
                .replace(ACCENT_SLOT, &escape_html(accent))
        };

        Ok(Self {
            head: fill(head),
            tail: fill(tail),
        })
    }

    /// Render the notice as a complete HTML document.
    ///
    /// Text is HTML-escaped and placed in a `<pre>` block so line breaks and
    /// spacing survive unchanged.
    pub fn render(&self, notice_text: &str) -> String {
        let body = escape_html(notice_text);
        let mut html = String::with_capacity(self.head.len() + body.len() + self.tail.len());
        html.push_str(&self.head);
        html.push_str(&body);
        html.push_str(&self.tail);
        html
    }
}
