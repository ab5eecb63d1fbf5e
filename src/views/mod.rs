//! Server-rendered HTML. Pages are plain `format!` templates over typed
//! view models; every user-supplied value passes through [`escape_html`]
//! on its way into markup.

pub mod admin;
pub mod layout;
pub mod registration;
pub mod widgets;

pub use layout::{page, page_with_script};

/// Escape text for interpolation into HTML body or attribute position.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Status,
    Warning,
    Error,
}

impl FlashKind {
    fn css_class(&self) -> &'static str {
        match self {
            FlashKind::Status => "status",
            FlashKind::Warning => "warning",
            FlashKind::Error => "error",
        }
    }
}

/// A one-shot message rendered at the top of the page.
#[derive(Debug, Clone)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    pub fn status(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Status,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

pub fn flashes_html(flashes: &[Flash]) -> String {
    flashes
        .iter()
        .map(|flash| {
            format!(
                "<div class=\"message message-{}\">{}</div>\n",
                flash.kind.css_class(),
                escape_html(&flash.text)
            )
        })
        .collect()
}
