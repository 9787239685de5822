use serde::Serialize;

/// One display line of a normalized schedule: day label + hours label.
///
/// The day label is a single day name, a "First - Last" run, or empty for
/// whole-string states like "Unknown". The hours label is opaque text shown
/// exactly as resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayHours {
    pub day: String,
    pub hours: String,
}

impl DayHours {
    pub fn new(day: impl Into<String>, hours: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            hours: hours.into(),
        }
    }
}
