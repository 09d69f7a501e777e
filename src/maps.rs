use crate::models::Coordinates;

pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 24.8607,
    lon: 67.0011,
};
pub const EMBED_ZOOM: u8 = 13;

/// Countries offered by the directory forms and the cities under each.
pub const CITY_OPTIONS: &[(&str, &[&str])] = &[
    ("Pakistan", &["Karachi", "Islamabad", "Lahore", "Faisalabad", "Multan"]),
    ("UAE", &["Dubai", "Al Ain", "Abu Dhabi", "Ajman", "Sharjah", "Fujairah"]),
    ("Saudia", &["Riyadh", "Jeddah", "Dammam", "Makkah", "Madinah"]),
    ("Behrain", &["Muharraq", "Riffa", "Manama", "Hamad Town", "Isa Town"]),
    ("Oman", &["Bahla", "Muscat", "Nizwa", "Salalah", "Khasab"]),
];

pub fn countries() -> Vec<&'static str> {
    CITY_OPTIONS.iter().map(|(country, _)| *country).collect()
}

pub fn cities_of(country: &str) -> &'static [&'static str] {
    CITY_OPTIONS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

/// Location preview iframe URL.
pub fn embed_url(api_key: &str, coordinates: Coordinates) -> String {
    format!(
        "https://www.google.com/maps/embed/v1/place?key={api_key}&q={},{}&zoom={EMBED_ZOOM}",
        coordinates.lat, coordinates.lon
    )
}

/// Coordinate picker: holds the single marker a click drops on the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapPicker {
    marker: Option<Coordinates>,
}

impl MapPicker {
    pub fn new(initial: Option<Coordinates>) -> Self {
        Self { marker: initial }
    }

    pub fn center(&self) -> Coordinates {
        self.marker.unwrap_or(DEFAULT_CENTER)
    }

    /// The map widget reports `lng`; records store `lon`.
    pub fn click(&mut self, lat: f64, lng: f64) -> Coordinates {
        let picked = Coordinates { lat, lon: lng };
        self.marker = Some(picked);
        picked
    }

    pub fn marker(&self) -> Option<Coordinates> {
        self.marker
    }
}
