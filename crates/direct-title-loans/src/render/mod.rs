//! HTML rendering for site pages.
//!
//! Page builders turn resolved content into a [`Document`]; [`SiteRenderer`]
//! wraps a document in the shared shell. Both steps are pure: equal inputs
//! give byte-identical output, and dated copy is fixed text.
//!
//! Builders append with `write!` into a `String`, which cannot fail, so the
//! `fmt::Result` is discarded with `let _ =`.

mod forms;
mod layout;
mod location;
mod pages;
mod paths;
mod schema;

use std::fmt::Write;

use serde_json::Value;

use crate::config::SiteConfig;
use crate::content::ContentRegistry;

pub use forms::{apply_page, ccpa_page, sda_page, CcpaView};
pub use location::city_page;
pub use pages::{
    about_page, home_page, locations_page, not_found_page, privacy_policy_page, service_page,
    services_page, state_page, terms_page,
};
pub use paths::page_for_path;

pub const BRAND: &str = "Direct Title Loans";
pub const MAIN_PHONE: &str = "(213) 555-0100";
pub const COPYRIGHT_YEAR: u16 = 2025;

/// Which surrounding chrome a page uses. Application flows drop the site
/// navigation to keep the applicant on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    Main,
    Minimal,
}

/// A rendered page body plus the metadata the shell needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub description: String,
    /// Request path, used for the canonical link.
    pub path: String,
    pub chrome: Chrome,
    pub body: String,
    /// schema.org JSON-LD fragment.
    pub structured_data: Option<Value>,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
        body: String,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            path: path.into(),
            chrome: Chrome::Main,
            body,
            structured_data: None,
        }
    }

    pub fn with_chrome(mut self, chrome: Chrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn with_structured_data(mut self, data: Value) -> Self {
        self.structured_data = Some(data);
        self
    }
}

/// Wraps documents in the site shell. Header and footer are built once
/// from the registry at startup.
#[derive(Debug, Clone)]
pub struct SiteRenderer {
    base_url: String,
    header: String,
    footer: String,
}

impl SiteRenderer {
    pub fn new(site: &SiteConfig, registry: &ContentRegistry) -> Self {
        Self {
            base_url: site.base_url.clone(),
            header: layout::header(),
            footer: layout::footer(registry),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn render(&self, document: &Document) -> String {
        let mut html = String::with_capacity(document.body.len() + 4096);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape(&document.title));
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            escape(&document.description)
        );
        let _ = writeln!(
            html,
            "<link rel=\"canonical\" href=\"{}{}\">",
            escape(&self.base_url),
            escape(&document.path)
        );
        html.push_str("</head>\n<body class=\"bg-white text-gray-900 antialiased\">\n");

        match document.chrome {
            Chrome::Main => {
                html.push_str(&self.header);
                html.push_str("<main>\n");
                html.push_str(&document.body);
                html.push_str("\n</main>\n");
                html.push_str(&self.footer);
            }
            Chrome::Minimal => {
                html.push_str(
                    "<main class=\"min-h-screen flex items-center justify-center py-12 px-4\">\n",
                );
                html.push_str(&document.body);
                html.push_str("\n</main>\n");
            }
        }

        if let Some(data) = &document.structured_data {
            let mut data = data.clone();
            if let Some(object) = data.as_object_mut() {
                object
                    .entry("url")
                    .or_insert_with(|| Value::String(format!("{}{}", self.base_url, document.path)));
            }
            let _ = writeln!(
                html,
                "<script type=\"application/ld+json\">{}</script>",
                schema::script_safe(&data)
            );
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Escape HTML special characters.
pub(crate) fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// `tel:` href for a display phone number.
pub(crate) fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renderer() -> SiteRenderer {
        let registry = ContentRegistry::embedded().expect("fixtures parse");
        SiteRenderer::new(&SiteConfig::default(), &registry)
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom's & Co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#x27;s &amp; Co&lt;/a&gt;"
        );
    }

    #[test]
    fn shell_includes_metadata_and_canonical_link() {
        let document = Document::new("About & Us", "desc", "/about", "<p>hi</p>".to_string());
        let html = renderer().render(&document);
        assert!(html.contains("<title>About &amp; Us</title>"));
        assert!(html.contains(
            "<link rel=\"canonical\" href=\"https://www.directtitleloans.com/about\">"
        ));
        assert!(html.contains("<nav"));
        assert!(html.contains("Important Disclosure"));
    }

    #[test]
    fn minimal_chrome_omits_navigation() {
        let document = Document::new("Apply", "desc", "/apply", String::new())
            .with_chrome(Chrome::Minimal);
        let html = renderer().render(&document);
        assert!(!html.contains("<nav"));
        assert!(!html.contains("<footer"));
    }

    #[test]
    fn structured_data_cannot_close_script_tag() {
        let document = Document::new("t", "d", "/", String::new())
            .with_structured_data(json!({ "name": "</script><b>" }));
        let html = renderer().render(&document);
        assert!(html.contains("<\\/script><b>"));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn structured_data_gains_page_url() {
        let document = Document::new("t", "d", "/locations", String::new())
            .with_structured_data(json!({ "@type": "FinancialService" }));
        let html = renderer().render(&document);
        assert!(html.contains("\"url\":\"https://www.directtitleloans.com/locations\""));
    }

    #[test]
    fn tel_href_keeps_digits_only() {
        assert_eq!(tel_href("(213) 555-0147"), "tel:2135550147");
    }
}
