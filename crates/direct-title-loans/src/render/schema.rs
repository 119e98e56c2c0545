use serde_json::{json, Value};

use super::{BRAND, MAIN_PHONE};
use crate::content::{LocationRecord, ServiceRecord};

/// Serializes JSON-LD for inline `<script>` use.
pub(super) fn script_safe(data: &Value) -> String {
    data.to_string().replace("</", "<\\/")
}

pub(super) fn organization() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FinancialService",
        "name": BRAND,
        "telephone": MAIN_PHONE,
        "areaServed": ["CA", "FL"],
    })
}

pub(super) fn branch(location: &LocationRecord) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FinancialService",
        "name": format!("{BRAND} of {}", location.city),
        "address": {
            "@type": "PostalAddress",
            "streetAddress": location.street_address(),
            "addressLocality": location.city,
            "addressRegion": location.state_code,
            "addressCountry": "US",
        },
        "telephone": location.phone,
    })
}

pub(super) fn loan_product(service: &ServiceRecord) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LoanOrCredit",
        "name": service.name,
        "description": service.summary,
        "provider": { "@type": "FinancialService", "name": BRAND },
    })
}
