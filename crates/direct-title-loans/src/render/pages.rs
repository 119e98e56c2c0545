use std::fmt::Write;

use super::layout::{bullet_list, prose};
use super::{escape, schema, tel_href, Document, MAIN_PHONE};
use crate::content::{ContentRegistry, ServiceRecord, StateRecord};

const POLICY_EFFECTIVE: &str = "January 1, 2025";
const POLICY_UPDATED: &str = "December 26, 2025";

const HOW_IT_WORKS: [(&str, &str); 3] = [
    ("Apply Online or Call", "Complete our simple application in minutes. Provide basic information about yourself and your vehicle."),
    ("Get Pre-Approved", "Receive a quick decision based on your vehicle's value. No obligation to proceed after pre-approval."),
    ("Get Your Cash", "Sign your agreement and receive funds - often in as little as 30 minutes with same-day funding available."),
];

const BENEFITS: [(&str, &str); 4] = [
    ("Fast Approval", "Get approved in minutes, not days. Same-day funding available when you need cash urgently."),
    ("Licensed & Regulated", "We're licensed by state financial regulators in California and Florida. Your protection is our priority."),
    ("Competitive Rates", "Transparent pricing with no hidden fees. We comply with state APR caps and fee restrictions."),
    ("Keep Your Vehicle", "Continue driving your car, truck, motorcycle, or RV while you repay your loan. We only hold the title."),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("I needed cash fast for an emergency and Direct Title Loans came through. The whole process took less than an hour and the staff was incredibly helpful. Highly recommend!", "Maria S., Los Angeles, CA"),
    ("Despite my bad credit, I was approved for a title loan the same day I applied. The terms were fair and I was able to keep driving my car. Great experience overall.", "James T., Miami, FL"),
    ("The online application was super easy and they came to my work for the vehicle inspection. Had the money in my account by the afternoon. Very professional service.", "Robert K., San Diego, CA"),
];

const HOME_FAQS: [(&str, &str); 5] = [
    ("How much can I borrow with a title loan?", "Loan amounts typically range from $100 to $50,000 depending on your vehicle type and value. Most customers receive between 25-50% of their vehicle's market value. Cars and motorcycles usually qualify for $100-$15,000, while trucks, RVs, and commercial vehicles can qualify for higher amounts."),
    ("Do I need good credit to get approved?", "No, your credit score is not the primary factor in approval. We focus on your vehicle's equity and your ability to repay. Bad credit, no credit, and even past bankruptcy are welcome to apply."),
    ("Can I still drive my vehicle with a title loan?", "Yes! You keep possession of and continue driving your vehicle throughout the loan term. We only hold your title as collateral. Once your loan is paid off, your title is returned to you."),
    ("How fast can I get money from a title loan?", "Many customers receive their funds the same day they apply. Once approved and after your vehicle inspection, you can receive cash in as little as 30 minutes. Online applications with direct deposit may take a few hours."),
    ("Are title loans legal in California and Florida?", "Yes, title loans are legal in both California and Florida with strict state regulations. In California, APR is capped at 30% with a minimum loan of $2,500. In Florida, tiered APR caps apply (30% on first $2,000, 24% on $2,000-$3,000, 18% over $3,000). We are licensed by the Department of Financial Protection and Innovation (California) and the Office of Financial Regulation (Florida)."),
];

const SERVICE_REQUIREMENTS: [&str; 5] = [
    "Valid government-issued ID",
    "Clear vehicle title in your name",
    "Vehicle for inspection",
    "Proof of income",
    "Proof of insurance",
];

fn state_names(registry: &ContentRegistry) -> String {
    registry
        .states()
        .iter()
        .map(|state| state.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}

fn section_heading(html: &mut String, heading: &str, lead: &str) {
    let _ = writeln!(
        html,
        "<div class=\"text-center mb-12\"><h2 class=\"text-3xl md:text-4xl font-bold text-gray-900 mb-4\">{}</h2>\
         <p class=\"text-lg text-gray-600 max-w-2xl mx-auto\">{}</p></div>",
        escape(heading),
        escape(lead)
    );
}

pub fn home_page(registry: &ContentRegistry) -> Document {
    let states = escape(&state_names(registry));
    let service_count = registry.services().len();
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<section class=\"bg-gradient-to-r from-[#1e3a8a] to-[#1e40af] text-white py-20\">\n");
    html.push_str("<div class=\"max-w-3xl mx-auto text-center\">\n");
    html.push_str("<h1 class=\"text-4xl md:text-5xl font-extrabold mb-4\">Fast Cash Using Your Vehicle Title</h1>\n");
    let _ = writeln!(
        html,
        "<p class=\"text-xl mb-8 opacity-95\">Get approved in minutes. Keep driving your car. Serving {states} with {service_count} specialized loan types.</p>"
    );
    let _ = writeln!(
        html,
        "<a href=\"/apply\" class=\"bg-white text-[#1e3a8a] px-8 py-3 rounded-lg font-semibold text-lg\">Apply Now - Get Cash Today</a>\n\
         <a href=\"{}\" class=\"border-2 border-white px-8 py-3 rounded-lg font-semibold text-lg\">Call {}</a>",
        tel_href(MAIN_PHONE),
        escape(MAIN_PHONE)
    );
    html.push_str("<div class=\"flex flex-wrap gap-4 justify-center mt-8\">\n");
    for badge in ["Licensed & Regulated", "Bad Credit OK", "Same Day Funding", "Keep Your Car"] {
        let _ = writeln!(
            html,
            "<span class=\"bg-white/15 px-4 py-2 rounded-full text-sm\">✓ {}</span>",
            escape(badge)
        );
    }
    html.push_str("</div>\n</div>\n</section>\n");

    html.push_str("<section class=\"py-20 bg-gray-50\">\n<div class=\"container mx-auto px-4\">\n");
    section_heading(
        &mut html,
        "Our Title Loan Services",
        &format!(
            "Choose from {service_count} specialized loan types designed for your needs. All services available across {}.",
            state_names(registry)
        ),
    );
    html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6\">\n");
    for service in registry.featured_services() {
        service_card(&mut html, service);
    }
    html.push_str("</div>\n</div>\n</section>\n");

    html.push_str("<section class=\"py-20 bg-white\">\n<div class=\"container mx-auto px-4\">\n");
    section_heading(
        &mut html,
        "How It Works",
        "Get cash in 3 simple steps. The entire process can be completed in as little as 30 minutes.",
    );
    html.push_str("<ol class=\"grid md:grid-cols-3 gap-8\">\n");
    for (title, text) in HOW_IT_WORKS {
        let _ = writeln!(
            html,
            "<li class=\"text-center\"><h3 class=\"text-xl font-semibold mb-3\">{}</h3><p class=\"text-gray-600\">{}</p></li>",
            escape(title),
            escape(text)
        );
    }
    html.push_str("</ol>\n</div>\n</section>\n");

    html.push_str("<section class=\"py-20 bg-gray-50\">\n<div class=\"container mx-auto px-4\">\n");
    section_heading(
        &mut html,
        "Service Locations",
        &format!(
            "We serve {} major cities across {} states with local expertise and personalized service.",
            registry.locations().len(),
            registry.states().len()
        ),
    );
    html.push_str("<div class=\"grid md:grid-cols-2 gap-8\">\n");
    for state in registry.states() {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"bg-white p-8 rounded-xl shadow-md\"><h3 class=\"text-2xl font-bold text-[#1e3a8a] mb-2\">{}</h3><p class=\"text-gray-600\">{}</p></a>",
            escape(&state.path()),
            escape(&state.name),
            escape(&state.city_names().join(", "))
        );
    }
    html.push_str("</div>\n</div>\n</section>\n");

    html.push_str("<section class=\"py-20 bg-white\">\n<div class=\"container mx-auto px-4\">\n");
    section_heading(
        &mut html,
        "Why Choose Direct Title Loans",
        "We're committed to transparent, responsible lending with exceptional customer service.",
    );
    html.push_str("<div class=\"grid md:grid-cols-2 lg:grid-cols-4 gap-8\">\n");
    for (title, text) in BENEFITS {
        let _ = writeln!(
            html,
            "<div class=\"text-center\"><h3 class=\"text-xl font-semibold mb-3\">{}</h3><p class=\"text-gray-600\">{}</p></div>",
            escape(title),
            escape(text)
        );
    }
    html.push_str("</div>\n</div>\n</section>\n");

    html.push_str("<section class=\"py-20 bg-gray-50\">\n<div class=\"container mx-auto px-4\">\n");
    section_heading(
        &mut html,
        "What Our Customers Say",
        &format!("Real experiences from real customers across {}.", state_names(registry)),
    );
    html.push_str("<div class=\"grid md:grid-cols-3 gap-6\">\n");
    for (text, author) in TESTIMONIALS {
        let _ = writeln!(
            html,
            "<div class=\"bg-white p-6 rounded-xl shadow-md\"><div class=\"text-[#f59e0b] text-lg mb-3\">★★★★★</div>\
             <p class=\"text-gray-600 italic mb-4\">{}</p><p class=\"text-sm text-gray-500 font-semibold\">— {}</p></div>",
            escape(text),
            escape(author)
        );
    }
    html.push_str("</div>\n</div>\n</section>\n");

    html.push_str("<section class=\"py-20 bg-white\">\n<div class=\"container mx-auto px-4 max-w-3xl\">\n");
    section_heading(
        &mut html,
        "Frequently Asked Questions",
        "Get answers to common questions about title loans and our services.",
    );
    for (question, answer) in HOME_FAQS {
        let _ = writeln!(
            html,
            "<div class=\"bg-gray-50 p-6 rounded-lg mb-4\"><h3 class=\"text-lg font-semibold mb-3\">{}</h3><p class=\"text-gray-600\">{}</p></div>",
            escape(question),
            escape(answer)
        );
    }
    html.push_str("</div>\n</section>\n");

    Document::new(
        "Direct Title Loans | Fast Cash Using Your Vehicle Title | CA & FL",
        format!(
            "Get fast cash using your vehicle title. Serving {} with {service_count} specialized loan types. Bad credit OK, same-day funding.",
            state_names(registry)
        ),
        "/",
        html,
    )
    .with_structured_data(schema::organization())
}

fn service_card(html: &mut String, service: &ServiceRecord) {
    let _ = writeln!(
        html,
        "<a href=\"{}\" class=\"bg-white p-8 rounded-xl shadow-md\"><h3 class=\"text-xl font-semibold text-[#1e3a8a] mb-3\">{}</h3>\
         <p class=\"text-gray-600 mb-4\">{}</p><span class=\"text-sm text-[#059669] font-semibold\">{}</span></a>",
        escape(&service.path()),
        escape(&service.name),
        escape(&service.summary),
        escape(&service.amount)
    );
}

pub fn about_page(registry: &ContentRegistry) -> Document {
    let states = state_names(registry);
    let mut html = String::with_capacity(4096);
    html.push_str("<div class=\"py-20\">\n<div class=\"container mx-auto px-4 max-w-4xl\">\n");
    html.push_str("<h1 class=\"text-4xl font-bold mb-8\">About Direct Title Loans</h1>\n");
    let _ = writeln!(
        html,
        "<p class=\"text-xl text-gray-600 mb-8\">We provide fast, responsible title loans across {} with transparent pricing and exceptional customer service.</p>",
        escape(&states)
    );
    prose(
        &mut html,
        &[(
            "Our Mission",
            "To provide accessible financial solutions to customers who need fast cash, while maintaining the highest standards of transparency and regulatory compliance.",
        )],
    );
    html.push_str("<h2>Why Choose Us</h2>\n");
    let licensed = format!("Licensed and regulated in {states}");
    bullet_list(
        &mut html,
        &[
            licensed.as_str(),
            "Transparent pricing with no hidden fees",
            "Same-day funding available",
            "Keep driving your vehicle",
            "Bad credit welcome",
        ],
    );
    html.push_str("<h2>Our Locations</h2>\n");
    let _ = writeln!(
        html,
        "<p>We serve {} major cities across {} states:</p>",
        registry.locations().len(),
        registry.states().len()
    );
    let cities: Vec<String> = registry
        .locations()
        .iter()
        .map(|location| format!("{}, {}", location.city, location.state_code))
        .collect();
    bullet_list(
        &mut html,
        &cities.iter().map(String::as_str).collect::<Vec<_>>(),
    );
    html.push_str("<h2>Licensing</h2>\n");
    bullet_list(
        &mut html,
        &[
            "California: Licensed by the Department of Financial Protection and Innovation (DFPI)",
            "Florida: Licensed by the Office of Financial Regulation (OFR)",
        ],
    );
    html.push_str("</div>\n</div>\n");

    Document::new(
        "About Us | Direct Title Loans",
        format!("Learn about Direct Title Loans - licensed and regulated title loan provider in {states}."),
        "/about",
        html,
    )
}

pub fn services_page(registry: &ContentRegistry) -> Document {
    let mut html = String::with_capacity(4096);
    html.push_str("<div class=\"py-20\">\n<div class=\"container mx-auto px-4\">\n");
    html.push_str("<h1 class=\"text-4xl font-bold mb-8\">Our Services</h1>\n");
    html.push_str("<div class=\"grid md:grid-cols-2 lg:grid-cols-3 gap-6\">\n");
    for service in registry.services() {
        service_card(&mut html, service);
    }
    html.push_str("</div>\n</div>\n</div>\n");

    Document::new(
        "Title Loan Services | Direct Title Loans",
        format!(
            "Explore our {} specialized title loan services. Car, motorcycle, truck, RV loans and more.",
            registry.services().len()
        ),
        "/services",
        html,
    )
}

pub fn service_page(service: &ServiceRecord) -> Document {
    let mut html = String::with_capacity(4096);
    html.push_str("<div class=\"py-20\">\n<div class=\"container mx-auto px-4 max-w-4xl\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"text-4xl font-bold mb-4\">{}</h1>\n<p class=\"text-xl text-gray-600 mb-8\">Loan Amount: {}</p>",
        escape(&service.name),
        escape(&service.amount)
    );
    prose(
        &mut html,
        &[(
            "How It Works",
            "Apply online or call us for fast approval. We focus on your vehicle's value, not your credit score.",
        )],
    );
    html.push_str("<h2>Requirements</h2>\n");
    bullet_list(&mut html, &SERVICE_REQUIREMENTS);
    html.push_str(
        "<div class=\"mt-8\"><a href=\"/apply\" class=\"bg-[#1e3a8a] text-white px-8 py-3 rounded-lg font-semibold\">Apply Now</a></div>\n",
    );
    html.push_str("</div>\n</div>\n");

    Document::new(
        format!("{} | Direct Title Loans", service.name),
        format!(
            "Get {} from {}. Fast approval, same-day funding.",
            service.name.to_lowercase(),
            service.amount
        ),
        service.path(),
        html,
    )
    .with_structured_data(schema::loan_product(service))
}

pub fn locations_page(registry: &ContentRegistry) -> Document {
    let mut html = String::with_capacity(4096);
    html.push_str("<div class=\"py-20\">\n<div class=\"container mx-auto px-4\">\n");
    html.push_str("<h1 class=\"text-4xl font-bold mb-8\">Our Locations</h1>\n");
    html.push_str("<div class=\"grid md:grid-cols-2 gap-8\">\n");
    for state in registry.states() {
        let _ = writeln!(
            html,
            "<div>\n<h2 class=\"text-2xl font-bold text-[#1e3a8a] mb-4\"><a href=\"{}\">{}</a></h2>\n<ul class=\"space-y-2\">",
            escape(&state.path()),
            escape(&state.name)
        );
        for city in &state.cities {
            let _ = writeln!(
                html,
                "<li><a href=\"/locations/{}/{}\" class=\"text-lg hover:text-[#1e3a8a]\">{}</a></li>",
                escape(&state.slug),
                escape(&city.slug),
                escape(&city.name)
            );
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</div>\n</div>\n</div>\n");

    let cities: Vec<&str> = registry
        .locations()
        .iter()
        .map(|location| location.city.as_str())
        .collect();
    Document::new(
        "Locations | Direct Title Loans in CA & FL",
        format!(
            "Find Direct Title Loans locations in {}. Serving {}.",
            state_names(registry),
            cities.join(", ")
        ),
        "/locations",
        html,
    )
}

pub fn state_page(registry: &ContentRegistry, state: &StateRecord) -> Document {
    let mut html = String::with_capacity(4096);
    html.push_str("<div class=\"py-20\">\n<div class=\"container mx-auto px-4\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"text-4xl font-bold mb-8\">Title Loans in {}</h1>",
        escape(&state.name)
    );
    let _ = writeln!(
        html,
        "<p class=\"text-xl text-gray-600 mb-12\">We serve {} cities across {}. All locations are licensed and regulated by state authorities.</p>",
        state.cities.len(),
        escape(&state.name)
    );
    html.push_str("<div class=\"grid md:grid-cols-2 gap-6\">\n");
    for branch in registry.locations_in(&state.slug) {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"p-6 bg-gray-50 rounded-lg\"><h2 class=\"text-xl font-semibold text-[#1e3a8a]\">{}, {}</h2>\
             <p class=\"text-gray-600\">{}</p><p class=\"text-gray-600\">{}</p></a>",
            escape(&branch.path()),
            escape(&branch.city),
            escape(&branch.state_code),
            escape(&branch.address),
            escape(&branch.phone)
        );
    }
    html.push_str("</div>\n</div>\n</div>\n");

    Document::new(
        format!("Title Loans in {} | Direct Title Loans", state.name),
        format!(
            "Get fast title loans in {}. Licensed and regulated. Serving {}.",
            state.name,
            state.city_names().join(", ")
        ),
        state.path(),
        html,
    )
}

fn policy_page(
    heading: &str,
    path: &str,
    description: &str,
    sections: &[(&str, &str)],
) -> Document {
    let mut html = String::with_capacity(4096);
    html.push_str("<div class=\"py-20\">\n<div class=\"container mx-auto px-4 max-w-4xl\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"text-4xl font-bold mb-8\">{}</h1>\n<p class=\"text-gray-600\">Effective Date: {POLICY_EFFECTIVE}<br>Last Updated: {POLICY_UPDATED}</p>",
        escape(heading)
    );
    prose(&mut html, sections);
    html.push_str("</div>\n</div>\n");

    Document::new(
        format!("{heading} | Direct Title Loans"),
        description,
        path,
        html,
    )
}

pub fn privacy_policy_page() -> Document {
    policy_page(
        "Privacy Policy",
        "/privacy-policy",
        "Read our privacy policy to understand how we collect, use, and protect your personal information.",
        &[
            ("1. Information We Collect", "We collect information you provide directly to us when you apply for a loan, create an account, or communicate with us."),
            ("2. How We Use Your Information", "We use the information we collect to process your loan application, communicate with you, and improve our services."),
            ("3. Information Sharing", "We may share your information with third parties as necessary to provide our services, comply with legal obligations, or protect our rights."),
            ("4. Data Security", "We implement reasonable security measures to protect your personal information from unauthorized access, use, or disclosure."),
            ("5. Your Rights", "You have the right to access, correct, or delete your personal information. Contact us to exercise these rights."),
            ("6. California Privacy Rights", "California residents have additional rights under the California Consumer Privacy Act (CCPA). See our CCPA page for details."),
            ("7. Virginia Privacy Rights", "Virginia residents have rights under the Virginia Consumer Data Protection Act (VCDPA)."),
            ("8. Contact Us", "If you have questions about this Privacy Policy, contact us at privacy@directtitleloans.com."),
        ],
    )
}

pub fn terms_page() -> Document {
    policy_page(
        "Terms and Conditions",
        "/terms-and-conditions",
        "Read our terms and conditions before applying for a title loan.",
        &[
            ("1. Acceptance of Terms", "By using our services, you agree to these Terms and Conditions."),
            ("2. Loan Agreement", "All loans are subject to approval and are governed by a separate loan agreement."),
            ("3. Fees and Charges", "Loan fees and interest rates vary by state and loan amount. All fees will be disclosed before you sign."),
            ("4. Repayment", "You agree to repay the loan according to the schedule in your loan agreement."),
            ("5. Default and Repossession", "Failure to repay may result in repossession of your vehicle."),
            ("6. Arbitration", "Any disputes shall be resolved through binding arbitration."),
            ("7. Contact Us", "If you have questions, contact us at support@directtitleloans.com."),
        ],
    )
}

pub fn not_found_page(path: &str) -> Document {
    let mut html = String::with_capacity(1024);
    html.push_str("<div class=\"py-20\">\n<div class=\"container mx-auto px-4 max-w-2xl text-center\">\n");
    html.push_str("<h1 class=\"text-4xl font-bold mb-4\">Page Not Found</h1>\n");
    html.push_str("<p class=\"text-gray-600 mb-8\">The page you're looking for doesn't exist or has moved.</p>\n");
    html.push_str(
        "<a href=\"/locations\" class=\"text-[#1e3a8a] font-semibold\">Browse our locations</a> · \
         <a href=\"/\" class=\"text-[#1e3a8a] font-semibold\">Return to Homepage</a>\n",
    );
    html.push_str("</div>\n</div>\n");

    Document::new(
        "Page Not Found | Direct Title Loans",
        "The requested page could not be found.",
        path,
        html,
    )
}
