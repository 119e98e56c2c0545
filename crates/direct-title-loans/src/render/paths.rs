use super::{
    about_page, apply_page, ccpa_page, city_page, home_page, locations_page, privacy_policy_page,
    sda_page, service_page, services_page, state_page, terms_page, CcpaView, Document,
};
use crate::content::{ContentError, ContentKind, ContentRegistry, ServiceRecord};
use crate::forms::{ApplicationWizard, PrivacyRequest, SdaApplication, SdaForm};

/// Builds the page a `GET` of `path` shows. Paths are matched exactly: no
/// case folding and no trailing-slash tolerance.
pub fn page_for_path(registry: &ContentRegistry, path: &str) -> Result<Document, ContentError> {
    let document = match path {
        "/" => home_page(registry),
        "/about" => about_page(registry),
        "/services" => services_page(registry),
        "/locations" => locations_page(registry),
        "/privacy-policy" => privacy_policy_page(),
        "/terms-and-conditions" => terms_page(),
        "/apply" => apply_page(&ApplicationWizard::new(), None),
        "/sda" => sda_page(&SdaForm::new(SdaApplication::default()), None),
        "/ccpa" => ccpa_page(CcpaView::Form {
            request: &PrivacyRequest::default(),
            missing: &[],
        }),
        _ => return dynamic_page(registry, path),
    };
    Ok(document)
}

fn dynamic_page(registry: &ContentRegistry, path: &str) -> Result<Document, ContentError> {
    if let Some(slug) = path.strip_prefix("/services/") {
        if !slug.contains('/') {
            return registry.resolve_service(slug).map(service_page);
        }
    } else if let Some(rest) = path.strip_prefix("/locations/") {
        return match rest.split_once('/') {
            None => registry
                .resolve_state(rest)
                .map(|state| state_page(registry, state)),
            Some((state, city)) if !city.contains('/') => {
                let location = registry.resolve_location(state, city)?;
                let featured: Vec<&ServiceRecord> = registry.featured_services().collect();
                Ok(city_page(location, &featured))
            }
            Some(_) => Err(ContentError::not_found(ContentKind::Page, path)),
        };
    }
    Err(ContentError::not_found(ContentKind::Page, path))
}
