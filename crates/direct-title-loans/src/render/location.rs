use std::fmt::Write;

use chrono::Weekday;

use super::layout::breadcrumbs;
use super::{escape, schema, tel_href, Document};
use crate::content::{BusinessHours, LocationRecord, ServiceRecord, StateCompliance};

/// Branch landing page: NAP card, services, state rules, reviews and FAQs.
pub fn city_page(location: &LocationRecord, featured: &[&ServiceRecord]) -> Document {
    let city = escape(&location.city);
    let state = escape(&location.state);
    let code = escape(&location.state_code);
    let phone = escape(&location.phone);
    let tel = tel_href(&location.phone);
    let landmark = location.primary_landmark().unwrap_or(location.city.as_str());
    let compliance = StateCompliance::for_code(&location.state_code);

    let mut html = String::with_capacity(16 * 1024);

    let state_path = format!("/locations/{}", location.state_slug);
    breadcrumbs(
        &mut html,
        &[
            ("/", "Home"),
            ("/locations", "Locations"),
            (state_path.as_str(), location.state.as_str()),
            ("", location.city.as_str()),
        ],
    );

    // hero
    html.push_str("<section class=\"bg-gradient-to-r from-[#1e3a8a] to-[#1e40af] text-white py-16\">\n");
    html.push_str("<div class=\"container mx-auto px-4\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"text-4xl md:text-5xl font-bold mb-4\">Fast Title Loans in {city}, {code}</h1>"
    );
    let _ = writeln!(
        html,
        "<p class=\"text-xl mb-8 opacity-95\">Licensed and regulated in {state}. Keep your car, get approved in minutes, same-day funding available.</p>"
    );
    let _ = writeln!(
        html,
        "<a href=\"/apply\" class=\"bg-white text-[#1e3a8a] px-8 py-3 rounded-lg font-semibold\">Apply Now - Get Cash Today</a>\n\
         <a href=\"{tel}\" class=\"border-2 border-white px-8 py-3 rounded-lg font-semibold\">Call {phone}</a>"
    );
    html.push_str("</div>\n</section>\n");

    // NAP card
    html.push_str("<section class=\"py-12 bg-gray-50\">\n<div class=\"container mx-auto px-4\">\n");
    html.push_str("<div class=\"bg-white p-8 rounded-xl shadow-md border-l-4 border-[#1e3a8a]\">\n");
    let _ = writeln!(
        html,
        "<h3 class=\"text-xl font-bold text-[#1e3a8a] mb-4\">{city} Location</h3>"
    );
    let _ = writeln!(html, "<p class=\"text-gray-700\">📍 {}</p>", escape(&location.address));
    let _ = writeln!(
        html,
        "<p>📞 <a href=\"{tel}\" class=\"text-[#1e3a8a] font-semibold\">{phone}</a></p>"
    );
    html.push_str("<h4 class=\"font-semibold text-gray-900 mt-6 mb-3\">Business Hours</h4>\n<dl>\n");
    for (day, hours) in location.hours.entries() {
        let _ = writeln!(
            html,
            "<div class=\"flex justify-between py-2\"><dt class=\"font-semibold\">{}</dt><dd class=\"text-gray-600\">{}</dd></div>",
            BusinessHours::day_label(day),
            escape(hours)
        );
    }
    html.push_str("</dl>\n");
    html.push_str("<h4 class=\"font-semibold text-gray-900 mt-6 mb-2\">Nearby Landmarks</h4>\n<div class=\"flex flex-wrap gap-2\">\n");
    for landmark in &location.landmarks {
        let _ = writeln!(
            html,
            "<span class=\"bg-blue-50 text-[#1e3a8a] px-3 py-1 rounded-full text-sm\">{}</span>",
            escape(landmark)
        );
    }
    html.push_str("</div>\n</div>\n</div>\n</section>\n");

    // services
    html.push_str("<section class=\"py-12 bg-white\">\n<div class=\"container mx-auto px-4\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-3xl font-bold mb-4\">Title Loan Services in {city}</h2>\n\
         <p class=\"text-gray-600 mb-8\">All of our specialized title loan services are available to {city} residents. Click any service below to learn more.</p>"
    );
    html.push_str("<div class=\"grid md:grid-cols-3 gap-6\">\n");
    for service in featured {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"bg-gray-50 p-6 rounded-lg\"><h3 class=\"text-lg font-semibold text-[#1e3a8a] mb-2\">{}</h3>\
             <p class=\"text-gray-600 text-sm mb-3\">Fast approval, keep driving your vehicle.</p>\
             <span class=\"text-[#1e3a8a] text-sm font-semibold\">Learn More →</span></a>",
            escape(&service.path()),
            escape(&service.name)
        );
    }
    html.push_str("</div>\n</div>\n</section>\n");

    if let Some(rules) = compliance {
        compliance_section(&mut html, location, &rules);
    }

    // reviews
    html.push_str("<section class=\"py-12 bg-gray-50\">\n<div class=\"container mx-auto px-4\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-3xl font-bold mb-4\">What Our {city} Customers Say</h2>\n\
         <p class=\"text-gray-600 mb-8\">Real experiences from real customers in {city}, {state}.</p>"
    );
    html.push_str("<div class=\"grid md:grid-cols-2 lg:grid-cols-3 gap-6\">\n");
    for review in &location.reviews {
        let _ = writeln!(
            html,
            "<div class=\"bg-white p-6 rounded-xl shadow-md\"><div class=\"text-[#f59e0b] text-lg mb-3\">{}</div>\
             <p class=\"text-gray-600 italic mb-4\">{}</p><p class=\"text-sm text-gray-500 font-semibold\">— {}, {city}</p></div>",
            review.stars(),
            escape(&review.text),
            escape(&review.name)
        );
    }
    html.push_str("</div>\n</div>\n</section>\n");

    // faq
    let borrowing = compliance
        .map(|rules| rules.borrowing_limits)
        .unwrap_or("Loan amounts depend on your vehicle's value and state regulations.");
    html.push_str("<section class=\"py-12 bg-white\">\n<div class=\"container mx-auto px-4 max-w-3xl\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-3xl font-bold mb-4\">{city} Title Loan FAQs</h2>\n\
         <p class=\"text-gray-600 mb-8\">Common questions from {city} residents about our title loan services.</p>"
    );
    let faqs = [
        (
            format!("Where is your {} location?", location.city),
            format!(
                "Our {} branch is located at {}, near {}.",
                location.city, location.address, landmark
            ),
        ),
        (
            format!("What are your hours in {}?", location.city),
            format!(
                "We're open {} Monday-Friday, {} Saturday. Online applications are accepted 24/7.",
                location.hours.for_day(Weekday::Mon),
                location.hours.for_day(Weekday::Sat)
            ),
        ),
        (
            format!("How much can I borrow in {}?", location.state),
            borrowing.to_string(),
        ),
    ];
    for (question, answer) in &faqs {
        let _ = writeln!(
            html,
            "<div class=\"bg-gray-50 p-6 rounded-lg mb-4\"><h3 class=\"text-lg font-semibold mb-3\">{}</h3><p class=\"text-gray-600\">{}</p></div>",
            escape(question),
            escape(answer)
        );
    }
    html.push_str("</div>\n</section>\n");

    // cta
    html.push_str("<section class=\"py-16 bg-gradient-to-r from-[#059669] to-[#047857] text-white text-center\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-3xl md:text-4xl font-bold mb-4\">Ready to Get Cash in {city}?</h2>\n\
         <p class=\"text-xl mb-8 opacity-95\">Apply now and get approved in minutes. Same-day funding available for {city} residents.</p>\n\
         <a href=\"/apply\" class=\"bg-white text-[#059669] px-8 py-3 rounded-lg font-semibold\">Apply Online Now</a>\n\
         <a href=\"{tel}\" class=\"border-2 border-white px-8 py-3 rounded-lg font-semibold\">Call {phone}</a>"
    );
    html.push_str("</section>\n");

    Document::new(
        format!(
            "Title Loans in {}, {} | Fast Cash at Local Branch",
            location.city, location.state_code
        ),
        format!(
            "Need cash today in {}? Visit our branch near {}. Get approved in 30 minutes. Call {}.",
            location.city, landmark, location.phone
        ),
        location.path(),
        html,
    )
    .with_structured_data(schema::branch(location))
}

fn compliance_section(html: &mut String, location: &LocationRecord, rules: &StateCompliance) {
    html.push_str("<section class=\"py-12 bg-blue-50\">\n<div class=\"container mx-auto px-4\">\n");
    html.push_str("<div class=\"bg-white p-8 rounded-xl shadow-md border-l-4 border-[#f59e0b]\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-2xl font-bold text-gray-900\">Understanding Title Loan Laws in {}</h2>",
        escape(&location.state)
    );
    let _ = writeln!(
        html,
        "<p class=\"text-gray-700 mb-6\">Residents of {} {}</p>",
        escape(&location.city),
        escape(rules.protection_summary)
    );
    html.push_str("<h3 class=\"text-lg font-semibold text-gray-900 mb-4\">Key Consumer Protections</h3>\n<ul class=\"space-y-3\">\n");
    for protection in rules.protections {
        let _ = writeln!(
            html,
            "<li><span class=\"text-[#059669] font-bold\">✓</span> {}</li>",
            escape(protection)
        );
    }
    html.push_str("</ul>\n");
    let _ = writeln!(
        html,
        "<p class=\"text-sm text-gray-600\"><strong>Regulatory Body:</strong> \
         <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></p>",
        escape(rules.regulator_url),
        escape(rules.regulator_name)
    );
    html.push_str("</div>\n</div>\n</section>\n");
}
