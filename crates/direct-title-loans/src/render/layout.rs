use std::fmt::Write;

use super::{escape, BRAND, COPYRIGHT_YEAR};
use crate::content::ContentRegistry;

const FOOTER_SERVICE_LINKS: usize = 4;

pub(super) fn header() -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<header class=\"bg-white shadow-sm sticky top-0 z-50\">\n");
    html.push_str("<div class=\"container mx-auto px-4 flex justify-between items-center h-16\">\n");
    let _ = writeln!(
        html,
        "<a href=\"/\" class=\"text-2xl font-bold text-[#1e3a8a]\">{}</a>",
        escape(BRAND)
    );
    html.push_str("<nav class=\"flex items-center gap-6\">\n");
    for (href, label) in [
        ("/services", "Services"),
        ("/locations", "Locations"),
        ("/about", "About"),
    ] {
        let _ = writeln!(
            html,
            "<a href=\"{href}\" class=\"text-gray-700 hover:text-[#1e3a8a] font-medium\">{label}</a>"
        );
    }
    html.push_str(
        "<a href=\"/apply\" class=\"bg-[#1e3a8a] text-white px-6 py-2 rounded-lg font-semibold\">Apply Now</a>\n",
    );
    html.push_str("</nav>\n</div>\n</header>\n");
    html
}

pub(super) fn footer(registry: &ContentRegistry) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<footer class=\"bg-gray-900 text-gray-300 py-12\">\n");
    html.push_str("<div class=\"container mx-auto px-4\">\n");
    html.push_str("<div class=\"grid md:grid-cols-4 gap-8 mb-8\">\n");

    let services: Vec<(String, String)> = registry
        .services()
        .iter()
        .take(FOOTER_SERVICE_LINKS)
        .map(|service| (service.path(), service.name.clone()))
        .collect();
    footer_column(&mut html, "Services", &services);

    let locations: Vec<(String, String)> = registry
        .locations()
        .iter()
        .map(|location| {
            (
                location.path(),
                format!("{}, {}", location.city, location.state_code),
            )
        })
        .collect();
    footer_column(&mut html, "Locations", &locations);

    let company = [
        ("/about", "About Us"),
        ("/privacy-policy", "Privacy Policy"),
        ("/terms-and-conditions", "Terms & Conditions"),
        ("/ccpa", "CCPA Privacy Rights"),
    ]
    .map(|(href, label)| (href.to_string(), label.to_string()));
    footer_column(&mut html, "Company", &company);

    let resources = [("/apply", "Apply Now"), ("/sda", "State Direct Application")]
        .map(|(href, label)| (href.to_string(), label.to_string()));
    footer_column(&mut html, "Resources", &resources);

    html.push_str("</div>\n");
    html.push_str("<div class=\"border-t border-gray-700 pt-8 text-sm\">\n");
    html.push_str(
        "<p class=\"mb-4\"><strong>Important Disclosure:</strong> Title loans are expensive forms of credit \
         and should only be used for short-term financial needs. Borrowing more than you can afford to repay \
         may result in the loss of your vehicle through repossession.</p>\n",
    );
    let _ = writeln!(
        html,
        "<p class=\"text-center\">&copy; {COPYRIGHT_YEAR} {}. All rights reserved.</p>",
        escape(BRAND)
    );
    html.push_str("</div>\n</div>\n</footer>\n");
    html
}

fn footer_column(html: &mut String, heading: &str, links: &[(String, String)]) {
    let _ = writeln!(
        html,
        "<div>\n<h3 class=\"text-white font-semibold mb-4\">{}</h3>\n<ul class=\"space-y-2\">",
        escape(heading)
    );
    for (href, label) in links {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\" class=\"hover:text-white\">{}</a></li>",
            escape(href),
            escape(label)
        );
    }
    html.push_str("</ul>\n</div>\n");
}

/// Breadcrumb trail; the last entry is rendered as plain text.
pub(super) fn breadcrumbs(html: &mut String, trail: &[(&str, &str)]) {
    html.push_str("<div class=\"bg-gray-50 py-4\">\n<div class=\"container mx-auto px-4\">\n");
    html.push_str("<div class=\"flex items-center gap-2 text-sm\">\n");
    for (idx, (href, label)) in trail.iter().enumerate() {
        if idx > 0 {
            html.push_str("<span class=\"text-gray-500\">→</span>\n");
        }
        if idx + 1 == trail.len() {
            let _ = writeln!(html, "<strong>{}</strong>", escape(label));
        } else {
            let _ = writeln!(
                html,
                "<a href=\"{}\" class=\"text-[#1e3a8a] hover:underline\">{}</a>",
                escape(href),
                escape(label)
            );
        }
    }
    html.push_str("</div>\n</div>\n</div>\n");
}

/// Prose sections under a `prose` wrapper.
pub(super) fn prose(html: &mut String, sections: &[(&str, &str)]) {
    html.push_str("<div class=\"prose max-w-none\">\n");
    for (title, text) in sections {
        let _ = writeln!(html, "<h2>{}</h2>\n<p>{}</p>", escape(title), escape(text));
    }
    html.push_str("</div>\n");
}

pub(super) fn bullet_list(html: &mut String, items: &[&str]) {
    html.push_str("<ul>\n");
    for item in items {
        let _ = writeln!(html, "<li>{}</li>", escape(item));
    }
    html.push_str("</ul>\n");
}
