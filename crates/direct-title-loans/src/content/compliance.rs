/// Consumer-protection copy shown on city pages, one entry per licensed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCompliance {
    pub code: &'static str,
    pub protection_summary: &'static str,
    pub protections: &'static [&'static str],
    pub regulator_name: &'static str,
    pub regulator_url: &'static str,
    pub borrowing_limits: &'static str,
}

const CALIFORNIA: StateCompliance = StateCompliance {
    code: "CA",
    protection_summary: "benefit from California's strong consumer protection laws enforced by the Department of Financial Protection and Innovation (DFPI).",
    protections: &[
        "California caps title loan interest at 30% APR",
        "Minimum loan amount is $2,500",
        "All lenders must be licensed by DFPI",
        "No prepayment penalties allowed",
    ],
    regulator_name: "Department of Financial Protection and Innovation (DFPI)",
    regulator_url: "https://dfpi.ca.gov",
    borrowing_limits: "California title loans start at a minimum of $2,500 and go up based on your vehicle's value. Interest rates are capped at 30% APR by California law.",
};

const FLORIDA: StateCompliance = StateCompliance {
    code: "FL",
    protection_summary: "are protected by Florida's Title Loan Act (Chapter 537) and Consumer Finance regulations enforced by the Office of Financial Regulation.",
    protections: &[
        "30% APR cap on first $2,000 of loan amount",
        "24% APR cap on amounts between $2,000-$3,000",
        "18% APR cap on amounts over $3,000",
        "10 days written notice required before vehicle sale",
    ],
    regulator_name: "Florida Office of Financial Regulation (OFR)",
    regulator_url: "https://www.flofr.gov",
    borrowing_limits: "Loan amounts in Florida range from $100 to $25,000 depending on your vehicle's value. Florida has tiered APR caps: 30% on first $2,000, 24% on $2,000-$3,000, and 18% over $3,000.",
};

impl StateCompliance {
    pub const fn supported() -> [Self; 2] {
        [CALIFORNIA, FLORIDA]
    }

    /// Exact, case-sensitive match on the two-letter state code.
    pub fn for_code(code: &str) -> Option<Self> {
        Self::supported().into_iter().find(|rules| rules.code == code)
    }
}
