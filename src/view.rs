//! Popup view layer: validated places + normalized hours into report data.

use crate::hours::{self, DayHours};
use crate::place::ValidatedPlaces;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PlaceView {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub cuisines: Vec<String>,

    /// Ordered display lines from the opening-hours normalizer.
    pub hours: Vec<DayHours>,

    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub places: usize,
    pub with_hours: usize,
    pub without_hours: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub places: Vec<PlaceView>,
    pub totals: TotalsView,
}

/// Build report data: one popup card per place, ascending id order.
///
/// Places without an `opening_hours` tag still get a card; the normalizer
/// turns the absent tag into its "Unknown" entry.
pub fn build_report_data(validated: &ValidatedPlaces) -> ReportData {
    let mut views = Vec::new();
    let mut with_hours = 0usize;

    for place in validated.places.values() {
        let raw_hours = place.opening_hours();
        if raw_hours.is_some() {
            with_hours += 1;
        }

        views.push(PlaceView {
            id: place.id,
            lat: place.lat,
            lon: place.lon,
            name: place.name().to_string(),
            cuisines: place.cuisines(),
            hours: hours::normalize_opening_hours(raw_hours),
            website: place.website().map(str::to_string),
        });
    }

    let totals = TotalsView {
        places: views.len(),
        with_hours,
        without_hours: views.len() - with_hours,
    };

    ReportData {
        places: views,
        totals,
    }
}
