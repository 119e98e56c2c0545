use serde::{Deserialize, Serialize};

/// Checkbox options offered by the privacy rights form.
pub const PRIVACY_REQUEST_TYPES: [&str; 6] = [
    "Know what data we collect",
    "Delete my data",
    "Opt-out of data sale",
    "Correct inaccurate data",
    "Limit use of sensitive data",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidentType {
    #[serde(rename = "CA")]
    California,
    #[serde(rename = "VA")]
    Virginia,
    Other,
}

impl ResidentType {
    pub const ALL: [Self; 3] = [Self::California, Self::Virginia, Self::Other];

    pub const fn code(self) -> &'static str {
        match self {
            Self::California => "CA",
            Self::Virginia => "VA",
            Self::Other => "Other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::California => "California Resident",
            Self::Virginia => "Virginia Resident",
            Self::Other => "Other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resident| resident.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrivacyField {
    ResidentType,
    Name,
    Email,
}

impl PrivacyField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ResidentType => "residentType",
            Self::Name => "name",
            Self::Email => "email",
        }
    }
}

/// A CCPA/VCDPA rights request as posted by the privacy form.
///
/// `resident_type` stays a raw string: the intake endpoint accepts whatever
/// the client sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivacyRequest {
    pub resident_type: String,
    pub request_types: Vec<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl PrivacyRequest {
    /// Collects urlencoded form pairs. Repeated `requestTypes` keys accumulate
    /// in submission order; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::default();
        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "residentType" => request.resident_type = value,
                "requestTypes" => {
                    if !request.request_types.contains(&value) {
                        request.request_types.push(value);
                    }
                }
                "name" => request.name = value,
                "email" => request.email = value,
                "phone" => request.phone = value,
                _ => {}
            }
        }
        request
    }

    pub fn resident(&self) -> Option<ResidentType> {
        ResidentType::from_code(&self.resident_type)
    }

    /// Required controls left blank. Phone and request types are optional.
    pub fn missing(&self) -> Vec<PrivacyField> {
        [
            (PrivacyField::ResidentType, &self.resident_type),
            (PrivacyField::Name, &self.name),
            (PrivacyField::Email, &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_accumulate_request_types() {
        let request = PrivacyRequest::from_pairs([
            ("residentType", "CA"),
            ("requestTypes", "Delete my data"),
            ("requestTypes", "Opt-out of data sale"),
            ("requestTypes", "Delete my data"),
            ("name", "Jane Doe"),
            ("email", "j@example.com"),
            ("utm_source", "mailer"),
        ]);

        assert_eq!(request.resident(), Some(ResidentType::California));
        assert_eq!(
            request.request_types,
            vec!["Delete my data".to_string(), "Opt-out of data sale".to_string()]
        );
        assert!(request.phone.is_empty());
        assert!(request.missing().is_empty());
    }

    #[test]
    fn serializes_with_form_field_names() {
        let request = PrivacyRequest {
            resident_type: "VA".to_string(),
            ..PrivacyRequest::default()
        };
        let value = serde_json::to_value(&request).expect("serializes");
        assert_eq!(value["residentType"], "VA");
        assert!(value["requestTypes"].as_array().is_some());
        assert_eq!(
            request.missing(),
            vec![PrivacyField::Name, PrivacyField::Email]
        );
    }
}
