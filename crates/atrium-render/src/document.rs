//! Print document model and HTML rendering

use std::fmt::Write as _;

/// Escape text for HTML element content and attribute values
#[must_use]
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Content section of a print document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Label/value rows
    KeyValues {
        /// Section heading, empty for none
        heading: String,
        /// (label, value) rows in display order
        rows: Vec<(String, String)>,
    },
    /// Tabular data
    Table {
        /// Section heading, empty for none
        heading: String,
        /// Column headers
        columns: Vec<String>,
        /// Cell rows, each the same length as `columns`
        rows: Vec<Vec<String>>,
    },
}

/// Signature line at the foot of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureBlock {
    /// Role of the signatory ("Inspector", "Contractor")
    pub label: String,
}

/// A printable document, assembled then rendered once
///
/// The rendered output embeds everything it needs. Nothing in the buffer
/// points back at the store or the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    title: String,
    subtitle: Option<String>,
    meta: Vec<(String, String)>,
    sections: Vec<Section>,
    signatures: Vec<SignatureBlock>,
}

impl PrintDocument {
    /// New document with a title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            meta: Vec::new(),
            sections: Vec::new(),
            signatures: Vec::new(),
        }
    }

    /// Set the subtitle shown under the title
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Add a header metadata row ("Date", "Site")
    #[must_use]
    pub fn with_meta(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.push((label.into(), value.into()));
        self
    }

    /// Add a content section
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Add a signature line
    #[must_use]
    pub fn with_signature(mut self, label: impl Into<String>) -> Self {
        self.signatures.push(SignatureBlock {
            label: label.into(),
        });
        self
    }

    /// Document title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render to a complete standalone HTML page
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(2_048);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = write!(html, "<title>{}</title>\n", escape_html(&self.title));
        html.push_str("<style>\n");
        html.push_str(STYLE);
        html.push_str("</style>\n</head>\n<body>\n");

        let _ = write!(html, "<h1>{}</h1>\n", escape_html(&self.title));
        if let Some(subtitle) = &self.subtitle {
            let _ = write!(html, "<p class=\"subtitle\">{}</p>\n", escape_html(subtitle));
        }

        if !self.meta.is_empty() {
            html.push_str("<table class=\"meta\">\n");
            for (label, value) in &self.meta {
                let _ = write!(
                    html,
                    "<tr><th>{}</th><td>{}</td></tr>\n",
                    escape_html(label),
                    escape_html(value)
                );
            }
            html.push_str("</table>\n");
        }

        for section in &self.sections {
            self.render_section(&mut html, section);
        }

        if !self.signatures.is_empty() {
            html.push_str("<div class=\"signatures\">\n");
            for signature in &self.signatures {
                let _ = write!(
                    html,
                    "<div class=\"signature\"><div class=\"line\"></div>{}</div>\n",
                    escape_html(&signature.label)
                );
            }
            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Render to a self-contained byte buffer
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.to_html().into_bytes()
    }

    fn render_section(&self, html: &mut String, section: &Section) {
        match section {
            Section::KeyValues { heading, rows } => {
                if !heading.is_empty() {
                    let _ = write!(html, "<h2>{}</h2>\n", escape_html(heading));
                }
                html.push_str("<table class=\"kv\">\n");
                for (label, value) in rows {
                    let _ = write!(
                        html,
                        "<tr><th>{}</th><td>{}</td></tr>\n",
                        escape_html(label),
                        escape_html(value)
                    );
                }
                html.push_str("</table>\n");
            }
            Section::Table {
                heading,
                columns,
                rows,
            } => {
                if !heading.is_empty() {
                    let _ = write!(html, "<h2>{}</h2>\n", escape_html(heading));
                }
                html.push_str("<table class=\"data\">\n<thead><tr>");
                for column in columns {
                    let _ = write!(html, "<th>{}</th>", escape_html(column));
                }
                html.push_str("</tr></thead>\n<tbody>\n");
                for row in rows {
                    html.push_str("<tr>");
                    for cell in row {
                        let _ = write!(html, "<td>{}</td>", escape_html(cell));
                    }
                    html.push_str("</tr>\n");
                }
                html.push_str("</tbody>\n</table>\n");
            }
        }
    }
}

const STYLE: &str = r#"body { font-family: Georgia, 'Times New Roman', serif; color: #111; margin: 2rem auto; max-width: 48rem; }
h1 { font-size: 1.4rem; border-bottom: 2px solid #111; padding-bottom: 0.3rem; }
h2 { font-size: 1.1rem; margin-top: 1.5rem; }
.subtitle { color: #444; margin-top: -0.5rem; }
table { border-collapse: collapse; width: 100%; margin: 0.75rem 0; }
table.meta th, table.kv th { text-align: left; width: 12rem; font-weight: 600; }
table th, table td { padding: 0.3rem 0.5rem; vertical-align: top; }
table.data th, table.data td { border: 1px solid #999; }
table.data thead th { background: #eee; }
.signatures { display: flex; gap: 3rem; margin-top: 3rem; }
.signature { flex: 1; text-align: center; }
.signature .line { border-bottom: 1px solid #111; height: 2.5rem; margin-bottom: 0.3rem; }
@media print { body { margin: 0; max-width: none; } }
"#;
