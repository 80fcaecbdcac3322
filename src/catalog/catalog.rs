use once_cell::sync::Lazy;

use crate::errors::TurfbookError;

use super::city::City;
use super::turf::TurfRecord;

const BUNDLED_TURFS: &str = include_str!("../../data/turfs.json");

static BUNDLED: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_json(BUNDLED_TURFS).expect("bundled turf data is valid"));

/// Read-only collection of turf records, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    turfs: Vec<TurfRecord>,
}

impl Catalog {
    pub fn new(turfs: Vec<TurfRecord>) -> Self {
        Self { turfs }
    }

    /// Parses a catalog from a JSON array of turf records.
    pub fn from_json(data: &str) -> Result<Self, TurfbookError> {
        let turfs: Vec<TurfRecord> = serde_json::from_str(data)?;
        Ok(Self::new(turfs))
    }

    /// The catalog shipped with the crate, parsed once.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    pub fn turfs(&self) -> &[TurfRecord] {
        &self.turfs
    }

    pub fn len(&self) -> usize {
        self.turfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turfs.is_empty()
    }

    pub fn turf(&self, id: u32) -> Option<&TurfRecord> {
        self.turfs.iter().find(|turf| turf.id == id)
    }

    pub fn count_in(&self, city: City) -> usize {
        self.turfs.iter().filter(|turf| turf.city == city).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses_and_covers_both_cities() {
        let catalog = Catalog::bundled();
        assert!(!catalog.is_empty());
        assert!(catalog.count_in(City::Ahmedabad) > 0);
        assert!(catalog.count_in(City::Surat) > 0);
    }

    #[test]
    fn turf_lookup_by_id() {
        let catalog = Catalog::bundled();
        let first = &catalog.turfs()[0];
        assert_eq!(catalog.turf(first.id).map(|t| t.id), Some(first.id));
        assert!(catalog.turf(9999).is_none());
    }
}
