use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Registry key for a branch: the two path segments joined with `-`.
///
/// No normalization happens here; `California`/`los-angeles/` never match.
pub fn location_key(state_slug: &str, city_slug: &str) -> String {
    format!("{state_slug}-{city_slug}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub state_slug: String,
    pub city_slug: String,
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub phone: String,
    pub address: String,
    pub landmarks: Vec<String>,
    pub hours: BusinessHours,
    pub reviews: Vec<Review>,
}

impl LocationRecord {
    pub fn key(&self) -> String {
        location_key(&self.state_slug, &self.city_slug)
    }

    pub fn path(&self) -> String {
        format!("/locations/{}/{}", self.state_slug, self.city_slug)
    }

    /// The address up to the first comma.
    pub fn street_address(&self) -> &str {
        self.address
            .split(',')
            .next()
            .unwrap_or(self.address.as_str())
    }

    pub fn primary_landmark(&self) -> Option<&str> {
        self.landmarks.first().map(String::as_str)
    }
}

/// Opening hours in week order. Kept as named fields so the rendering order
/// never depends on map iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl BusinessHours {
    pub fn for_day(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (Weekday, &str)> + '_ {
        const WEEK: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        WEEK.into_iter().map(move |day| (day, self.for_day(day)))
    }

    pub const fn day_label(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: u8,
    pub text: String,
}

impl Review {
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityLink {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    pub slug: String,
    pub name: String,
    pub code: String,
    pub cities: Vec<CityLink>,
}

impl StateRecord {
    pub fn path(&self) -> String {
        format!("/locations/{}", self.slug)
    }

    pub fn city_names(&self) -> Vec<&str> {
        self.cities.iter().map(|city| city.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub slug: String,
    pub name: String,
    pub amount: String,
    pub summary: String,
    /// Shown on the home page and on every city page.
    #[serde(default)]
    pub featured: bool,
}

impl ServiceRecord {
    pub fn path(&self) -> String {
        format!("/services/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours() -> BusinessHours {
        BusinessHours {
            monday: "9:00 AM - 6:00 PM".to_string(),
            tuesday: "9:00 AM - 6:00 PM".to_string(),
            wednesday: "9:00 AM - 6:00 PM".to_string(),
            thursday: "9:00 AM - 6:00 PM".to_string(),
            friday: "9:00 AM - 6:00 PM".to_string(),
            saturday: "10:00 AM - 4:00 PM".to_string(),
            sunday: "Closed".to_string(),
        }
    }

    #[test]
    fn hours_iterate_in_week_order() {
        let hours = hours();
        let days: Vec<_> = hours
            .entries()
            .map(|(day, _)| BusinessHours::day_label(day))
            .collect();
        assert_eq!(days.first(), Some(&"Monday"));
        assert_eq!(days.last(), Some(&"Sunday"));
        assert_eq!(hours.for_day(Weekday::Sun), "Closed");
    }

    #[test]
    fn street_address_stops_at_first_comma() {
        let record = LocationRecord {
            state_slug: "florida".to_string(),
            city_slug: "miami".to_string(),
            city: "Miami".to_string(),
            state: "Florida".to_string(),
            state_code: "FL".to_string(),
            phone: "(305) 555-0189".to_string(),
            address: "1200 Brickell Avenue, Suite 400, Miami, FL 33131".to_string(),
            landmarks: vec!["Bayside Marketplace".to_string()],
            hours: hours(),
            reviews: Vec::new(),
        };

        assert_eq!(record.key(), "florida-miami");
        assert_eq!(record.street_address(), "1200 Brickell Avenue");
        assert_eq!(record.path(), "/locations/florida/miami");
    }

    #[test]
    fn stars_cap_at_five() {
        let review = Review {
            name: "A.".to_string(),
            rating: 9,
            text: String::new(),
        };
        assert_eq!(review.stars().chars().count(), 5);
    }
}
