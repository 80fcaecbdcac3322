use crate::catalog::{Catalog, CityFilter, TurfRecord};

use super::criteria::SearchCriteria;

/// Filters the catalog by the criteria's city, preserving catalog order.
///
/// `All` returns the full catalog. The criteria's `date` and `time` are
/// accepted but intentionally not applied: the catalog carries no per-date or
/// per-time availability data, so only the city narrows the listing.
/// Pure and idempotent; the catalog is never mutated.
pub fn filter_turfs<'a>(catalog: &'a Catalog, criteria: &SearchCriteria) -> Vec<&'a TurfRecord> {
    catalog
        .turfs()
        .iter()
        .filter(|turf| criteria.city.matches(turf.city))
        .collect()
}

/// Listing header data derived from a filter result. The count always comes
/// from the result length, so the "N turfs found" label cannot drift from the
/// rendered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub city: CityFilter,
    pub count: usize,
}

impl FilterSummary {
    pub fn new(criteria: &SearchCriteria, results: &[&TurfRecord]) -> Self {
        Self {
            city: criteria.city,
            count: results.len(),
        }
    }

    pub fn tag(&self) -> String {
        match self.city {
            CityFilter::All => "All Cities".to_string(),
            CityFilter::City(city) => city.to_string(),
        }
    }

    pub fn heading(&self) -> String {
        match self.city {
            CityFilter::All => "Featured Cricket Turfs".to_string(),
            CityFilter::City(city) => format!("Best Turfs in {city}"),
        }
    }

    pub fn found_label(&self) -> String {
        let plural = if self.count == 1 { "" } else { "s" };
        match self.city {
            CityFilter::All => format!("{} turf{} found across both cities", self.count, plural),
            CityFilter::City(city) => {
                format!("{} turf{} found in {}", self.count, plural, city)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::City;

    #[test]
    fn summary_labels_follow_the_selection() {
        let catalog = Catalog::bundled();
        let criteria = SearchCriteria {
            city: CityFilter::City(City::Surat),
            ..SearchCriteria::default()
        };
        let results = filter_turfs(catalog, &criteria);
        let summary = FilterSummary::new(&criteria, &results);

        assert_eq!(summary.count, results.len());
        assert_eq!(summary.heading(), "Best Turfs in Surat");
        assert!(summary.found_label().ends_with("found in Surat"));

        let all = SearchCriteria::default();
        let results = filter_turfs(catalog, &all);
        let summary = FilterSummary::new(&all, &results);
        assert_eq!(summary.heading(), "Featured Cricket Turfs");
        assert!(summary.found_label().ends_with("across both cities"));
    }
}
