use direct_title_loans::config::SiteConfig;
use direct_title_loans::content::{ContentRegistry, ServiceRecord};
use direct_title_loans::render::{city_page, page_for_path, SiteRenderer};

fn fixtures() -> (ContentRegistry, SiteRenderer) {
    let registry = ContentRegistry::embedded().expect("embedded fixtures load");
    let renderer = SiteRenderer::new(&SiteConfig::default(), &registry);
    (registry, renderer)
}

#[test]
fn city_page_is_byte_identical_across_renders() {
    let (registry, renderer) = fixtures();
    let location = registry
        .resolve_location("california", "los-angeles")
        .expect("los angeles");
    let featured: Vec<&ServiceRecord> = registry.featured_services().collect();

    let first = renderer.render(&city_page(location, &featured));
    let second = renderer.render(&city_page(location, &featured));
    assert_eq!(first, second);
}

#[test]
fn city_page_carries_nap_and_branch_schema() {
    let (registry, renderer) = fixtures();
    let document = page_for_path(&registry, "/locations/florida/miami").expect("miami");
    let html = renderer.render(&document);

    assert!(html.contains("href=\"tel:3055550189\""));
    assert!(html.contains(
        "<link rel=\"canonical\" href=\"https://www.directtitleloans.com/locations/florida/miami\">"
    ));
    assert!(html.contains("Office of Financial Regulation"));
    assert!(html.contains("\"@type\":\"PostalAddress\""));

    let schema = document.structured_data.expect("branch schema");
    let street = schema["address"]["streetAddress"].as_str().expect("street");
    assert!(!street.contains(','));
    assert_eq!(schema["address"]["addressRegion"], "FL");
}

#[test]
fn california_branch_shows_california_rules() {
    let (registry, _) = fixtures();
    let document = page_for_path(&registry, "/locations/california/san-diego").expect("san diego");
    assert!(document.body.contains("Department of Financial Protection and Innovation"));
    assert!(!document.body.contains("Office of Financial Regulation"));
}

#[test]
fn legal_pages_use_fixed_dates() {
    let (registry, renderer) = fixtures();
    for path in ["/privacy-policy", "/terms-and-conditions"] {
        let html = renderer.render(&page_for_path(&registry, path).expect(path));
        assert!(html.contains("Effective Date: January 1, 2025"));
        assert!(html.contains("Last Updated: December 26, 2025"));
        assert!(html.contains("&copy; 2025 Direct Title Loans"));
    }
}

#[test]
fn apply_page_renders_without_site_navigation() {
    let (registry, renderer) = fixtures();
    let html = renderer.render(&page_for_path(&registry, "/apply").expect("apply"));
    assert!(html.contains("Personal Information"));
    assert!(!html.contains("<nav"));
}
