use serde::{Deserialize, Serialize};

use crate::catalog::{City, CityFilter, ANY_TIME};

/// Current search selection. A single instance is owned by the session and
/// mutated only through [`CriteriaUpdate`] events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub city: CityFilter,
    /// Optional ISO `YYYY-MM-DD` date. Collected but not applied as a filter
    /// predicate; the catalog carries no per-date availability.
    pub date: String,
    /// Either the `"Any Time"` sentinel or one slot label. Collected but not
    /// applied as a filter predicate.
    pub time: String,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            city: CityFilter::All,
            date: String::new(),
            time: ANY_TIME.to_string(),
        }
    }
}

/// One atomic criteria write. Every entry point yields a complete
/// `{city, date, time}` triple; whichever surface fires last wins, with no
/// merging of partial updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaUpdate {
    /// Quick city selector: picks a city and mirrors the current date/time.
    QuickCity(CityFilter),
    /// Full search form submit: replaces all three fields.
    Search {
        city: CityFilter,
        date: String,
        time: String,
    },
    /// Quick-area tag click: derives the city from the area label and mirrors
    /// the current date/time.
    QuickArea(String),
}

impl SearchCriteria {
    /// Applies one update event. The next triple is computed in full before
    /// the state is replaced, so the filter engine can never observe a torn
    /// write across the three fields.
    pub fn apply(&mut self, update: CriteriaUpdate) {
        let next = match update {
            CriteriaUpdate::QuickCity(city) => Self {
                city,
                date: self.date.clone(),
                time: self.time.clone(),
            },
            CriteriaUpdate::Search { city, date, time } => Self { city, date, time },
            CriteriaUpdate::QuickArea(label) => Self {
                city: CityFilter::City(City::from_area_label(&label)),
                date: self.date.clone(),
                time: self.time.clone(),
            },
        };
        *self = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_city_keeps_date_and_time() {
        let mut criteria = SearchCriteria {
            city: CityFilter::All,
            date: "2025-06-01".into(),
            time: "06:00 AM".into(),
        };
        criteria.apply(CriteriaUpdate::QuickCity(CityFilter::City(City::Surat)));
        assert_eq!(criteria.city, CityFilter::City(City::Surat));
        assert_eq!(criteria.date, "2025-06-01");
        assert_eq!(criteria.time, "06:00 AM");
    }

    #[test]
    fn search_replaces_the_whole_triple() {
        let mut criteria = SearchCriteria::default();
        criteria.apply(CriteriaUpdate::Search {
            city: CityFilter::City(City::Ahmedabad),
            date: "2025-07-15".into(),
            time: "08:00 PM".into(),
        });
        assert_eq!(criteria.city, CityFilter::City(City::Ahmedabad));
        assert_eq!(criteria.date, "2025-07-15");
        assert_eq!(criteria.time, "08:00 PM");
    }

    #[test]
    fn quick_area_derives_city_from_label() {
        let mut criteria = SearchCriteria::default();
        criteria.apply(CriteriaUpdate::QuickArea("Vesu, Surat".into()));
        assert_eq!(criteria.city, CityFilter::City(City::Surat));

        criteria.apply(CriteriaUpdate::QuickArea("Satellite, Ahmedabad".into()));
        assert_eq!(criteria.city, CityFilter::City(City::Ahmedabad));
    }
}
