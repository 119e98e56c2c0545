use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use super::domain::{location_key, LocationRecord, ServiceRecord, StateRecord};

const EMBEDDED_LOCATIONS: &str = include_str!("../../data/locations.json");
const EMBEDDED_STATES: &str = include_str!("../../data/states.json");
const EMBEDDED_SERVICES: &str = include_str!("../../data/services.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Location,
    State,
    Service,
    Page,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContentKind::Location => "location",
            ContentKind::State => "state",
            ContentKind::Service => "service",
            ContentKind::Page => "page",
        };
        f.write_str(label)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("no {kind} registered for '{key}'")]
    NotFound { kind: ContentKind, key: String },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {fixture}: {source}")]
    Parse {
        fixture: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate {kind} key '{key}'")]
    Duplicate { kind: ContentKind, key: String },
    #[error("state '{state}' lists city '{city}' without a location record")]
    DanglingCity { state: String, city: String },
}

impl ContentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }

    pub(crate) fn not_found(kind: ContentKind, key: impl Into<String>) -> Self {
        ContentError::NotFound {
            kind,
            key: key.into(),
        }
    }
}

/// Raw fixture lists before indexing.
#[derive(Debug, Clone, Default)]
pub struct ContentFixtures {
    pub locations: Vec<LocationRecord>,
    pub states: Vec<StateRecord>,
    pub services: Vec<ServiceRecord>,
}

impl ContentFixtures {
    pub fn embedded() -> Result<Self, ContentError> {
        Ok(Self {
            locations: parse_fixture("locations.json", EMBEDDED_LOCATIONS)?,
            states: parse_fixture("states.json", EMBEDDED_STATES)?,
            services: parse_fixture("services.json", EMBEDDED_SERVICES)?,
        })
    }

    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        Ok(Self {
            locations: read_fixture(&dir.join("locations.json"))?,
            states: read_fixture(&dir.join("states.json"))?,
            services: read_fixture(&dir.join("services.json"))?,
        })
    }
}

fn parse_fixture<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse {
        fixture: name.to_string(),
        source,
    })
}

fn read_fixture<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixture(&path.display().to_string(), &raw)
}

/// Immutable slug lookup over the site fixtures.
///
/// Built once at startup and shared read-only; listing order follows the
/// fixture files.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    locations: Vec<LocationRecord>,
    location_index: HashMap<String, usize>,
    states: Vec<StateRecord>,
    state_index: HashMap<String, usize>,
    services: Vec<ServiceRecord>,
    service_index: HashMap<String, usize>,
}

impl ContentRegistry {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_fixtures(ContentFixtures::embedded()?)
    }

    /// Loads from `dir` when given, otherwise the fixtures compiled into the binary.
    pub fn load(dir: Option<&Path>) -> Result<Self, ContentError> {
        let fixtures = match dir {
            Some(dir) => ContentFixtures::from_dir(dir)?,
            None => ContentFixtures::embedded()?,
        };
        Self::from_fixtures(fixtures)
    }

    pub fn from_fixtures(fixtures: ContentFixtures) -> Result<Self, ContentError> {
        let ContentFixtures {
            locations,
            states,
            services,
        } = fixtures;

        let location_index = index_by(&locations, ContentKind::Location, LocationRecord::key)?;
        let state_index = index_by(&states, ContentKind::State, |state| state.slug.clone())?;
        let service_index = index_by(&services, ContentKind::Service, |service| {
            service.slug.clone()
        })?;

        for state in &states {
            for city in &state.cities {
                if !location_index.contains_key(&location_key(&state.slug, &city.slug)) {
                    return Err(ContentError::DanglingCity {
                        state: state.slug.clone(),
                        city: city.slug.clone(),
                    });
                }
            }
        }

        debug!(
            locations = locations.len(),
            states = states.len(),
            services = services.len(),
            "content registry loaded"
        );

        Ok(Self {
            locations,
            location_index,
            states,
            state_index,
            services,
            service_index,
        })
    }

    pub fn resolve_location(
        &self,
        state_slug: &str,
        city_slug: &str,
    ) -> Result<&LocationRecord, ContentError> {
        let key = location_key(state_slug, city_slug);
        match self.location_index.get(&key) {
            Some(&idx) => Ok(&self.locations[idx]),
            None => Err(ContentError::not_found(ContentKind::Location, key)),
        }
    }

    pub fn resolve_state(&self, state_slug: &str) -> Result<&StateRecord, ContentError> {
        self.state_index
            .get(state_slug)
            .map(|&idx| &self.states[idx])
            .ok_or_else(|| ContentError::not_found(ContentKind::State, state_slug))
    }

    pub fn resolve_service(&self, service_slug: &str) -> Result<&ServiceRecord, ContentError> {
        self.service_index
            .get(service_slug)
            .map(|&idx| &self.services[idx])
            .ok_or_else(|| ContentError::not_found(ContentKind::Service, service_slug))
    }

    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }

    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn featured_services(&self) -> impl Iterator<Item = &ServiceRecord> {
        self.services.iter().filter(|service| service.featured)
    }

    pub fn locations_in(&self, state_slug: &str) -> impl Iterator<Item = &LocationRecord> {
        let state_slug = state_slug.to_string();
        self.locations
            .iter()
            .filter(move |location| location.state_slug == state_slug)
    }
}

fn index_by<T>(
    records: &[T],
    kind: ContentKind,
    key: impl Fn(&T) -> String,
) -> Result<HashMap<String, usize>, ContentError> {
    let mut index = HashMap::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let key = key(record);
        if index.insert(key.clone(), idx).is_some() {
            return Err(ContentError::Duplicate { kind, key });
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixtures_index_every_record() {
        let registry = ContentRegistry::embedded().expect("embedded fixtures parse");
        assert_eq!(registry.locations().len(), 4);
        assert_eq!(registry.states().len(), 2);
        assert_eq!(registry.services().len(), 10);
        assert_eq!(registry.featured_services().count(), 6);
        assert_eq!(registry.locations_in("florida").count(), 2);
    }

    #[test]
    fn duplicate_service_slugs_are_rejected() {
        let mut fixtures = ContentFixtures::embedded().expect("fixtures parse");
        let copy = fixtures.services[0].clone();
        fixtures.services.push(copy);

        let err = ContentRegistry::from_fixtures(fixtures).expect_err("duplicate rejected");
        assert!(matches!(
            err,
            ContentError::Duplicate {
                kind: ContentKind::Service,
                ..
            }
        ));
    }

    #[test]
    fn state_cities_must_have_locations() {
        let mut fixtures = ContentFixtures::embedded().expect("fixtures parse");
        fixtures.locations.retain(|location| location.city_slug != "tampa");

        let err = ContentRegistry::from_fixtures(fixtures).expect_err("dangling city");
        assert_eq!(
            err.to_string(),
            "state 'florida' lists city 'tampa' without a location record"
        );
    }

    #[test]
    fn missing_content_dir_reports_path() {
        let err = ContentRegistry::load(Some(Path::new("/nonexistent/site-content")))
            .expect_err("directory missing");
        assert!(matches!(err, ContentError::Read { .. }));
        assert!(!err.is_not_found());
    }
}
