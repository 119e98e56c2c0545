//! Read-only site content: branch locations, state directories and loan
//! products, keyed by URL slugs.

mod compliance;
mod domain;
mod registry;

pub use compliance::StateCompliance;
pub use domain::{
    location_key, BusinessHours, CityLink, LocationRecord, Review, ServiceRecord, StateRecord,
};
pub use registry::{ContentError, ContentFixtures, ContentKind, ContentRegistry};
