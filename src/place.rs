//! Places export spec: the Overpass-style JSON the map feeds its popups.
//!
//! JSON shape (Overpass `out:json` node output):
//! {
//!   "elements": [
//!     {
//!       "id": 4120997551,
//!       "lat": 40.7359,
//!       "lon": -73.9301,
//!       "tags": {
//!         "name": "...",
//!         "cuisine": "pizza;italian",
//!         "opening_hours": "Mo-Fr 11:00-22:00",
//!         "website": "https://..."
//!       }
//!     },
//!     ...
//!   ]
//! }
//!
//! Tags are carried opaquely; only the tags the popup consumes get typed
//! accessors. We validate ids and key places by id for deterministic output.

use crate::diagnostics;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct PlacesSpec {
    #[serde(default)]
    pub elements: Vec<RawPlace>,
}

/// Raw element shape as it appears in the export.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,

    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// Validated place ready for view building.
#[derive(Debug, Clone)]
pub struct Place {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    tags: BTreeMap<String, String>,
}

impl Place {
    /// Display name; unnamed places keep the popup's historical fallback.
    pub fn name(&self) -> &str {
        self.tags
            .get("name")
            .map(String::as_str)
            .unwrap_or("Unnamed Restaurant")
    }

    /// Cuisine chips: the raw tag split on `;`, trimmed, empty pieces dropped.
    pub fn cuisines(&self) -> Vec<String> {
        let raw = self
            .tags
            .get("cuisine")
            .map(String::as_str)
            .unwrap_or("unknown");

        let chips: Vec<String> = raw
            .split(';')
            .map(str::trim)
            .filter(|chip| !chip.is_empty())
            .map(str::to_string)
            .collect();

        if chips.is_empty() {
            vec!["unknown".to_string()]
        } else {
            chips
        }
    }

    /// Raw `opening_hours` tag, handed verbatim to the normalizer.
    pub fn opening_hours(&self) -> Option<&str> {
        self.tags.get("opening_hours").map(String::as_str)
    }

    pub fn website(&self) -> Option<&str> {
        self.tags.get("website").map(String::as_str)
    }
}

/// Validated, id-keyed places.
#[derive(Debug, Clone)]
pub struct ValidatedPlaces {
    pub places: BTreeMap<i64, Place>,
}

impl PlacesSpec {
    /// Key places by id, check duplicates, reject an empty export.
    pub fn validate_and_build(&self) -> anyhow::Result<ValidatedPlaces> {
        use anyhow::bail;

        let mut places: BTreeMap<i64, Place> = BTreeMap::new();
        for raw in self.elements.clone() {
            if places.contains_key(&raw.id) {
                bail!(
                    "{}",
                    diagnostics::error_message(format!(
                        "duplicate element id in places export: {}",
                        raw.id
                    ))
                );
            }
            places.insert(
                raw.id,
                Place {
                    id: raw.id,
                    lat: raw.lat,
                    lon: raw.lon,
                    tags: raw.tags,
                },
            );
        }

        if places.is_empty() {
            bail!(
                "{}",
                diagnostics::error_message("places export contained no elements")
            );
        }

        Ok(ValidatedPlaces { places })
    }
}
