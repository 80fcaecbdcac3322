use std::fmt;

use serde::{Deserialize, Serialize};

/// Cities the catalog currently covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Ahmedabad,
    Surat,
}

impl City {
    pub const ALL: [City; 2] = [City::Ahmedabad, City::Surat];

    pub fn name(self) -> &'static str {
        match self {
            City::Ahmedabad => "Ahmedabad",
            City::Surat => "Surat",
        }
    }

    /// Derives the city from a quick-filter area label such as
    /// `"Vesu, Surat"`. Total over the fixed label vocabulary: a label
    /// containing `Ahmedabad` maps there, anything else maps to Surat.
    pub fn from_area_label(label: &str) -> City {
        if label.contains(City::Ahmedabad.name()) {
            City::Ahmedabad
        } else {
            City::Surat
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// City selection applied by the filter engine: either the `All` sentinel or
/// one concrete city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CityFilter {
    #[default]
    All,
    City(City),
}

impl CityFilter {
    /// Parses a filter value. Only exact city names select a city; `"All"`
    /// and any unrecognized value fall back to `All`, so a malformed filter
    /// can never produce an empty-result dead end.
    pub fn parse(value: &str) -> CityFilter {
        City::ALL
            .into_iter()
            .find(|city| city.name() == value)
            .map(CityFilter::City)
            .unwrap_or(CityFilter::All)
    }

    pub fn matches(self, city: City) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::City(selected) => selected == city,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CityFilter::All => "All",
            CityFilter::City(city) => city.name(),
        }
    }
}

impl fmt::Display for CityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CityFilter> for String {
    fn from(filter: CityFilter) -> String {
        filter.as_str().to_string()
    }
}

impl From<String> for CityFilter {
    fn from(value: String) -> CityFilter {
        CityFilter::parse(&value)
    }
}
