use turfbook::catalog::{City, CityFilter, ANY_TIME};
use turfbook::search::{CriteriaUpdate, SearchCriteria};

#[test]
fn defaults_match_first_use() {
    let criteria = SearchCriteria::default();
    assert_eq!(criteria.city, CityFilter::All);
    assert_eq!(criteria.date, "");
    assert_eq!(criteria.time, ANY_TIME);
}

#[test]
fn quick_area_tags_set_the_derived_city() {
    let mut criteria = SearchCriteria::default();

    criteria.apply(CriteriaUpdate::QuickArea("Vesu, Surat".into()));
    assert_eq!(criteria.city, CityFilter::City(City::Surat));

    criteria.apply(CriteriaUpdate::QuickArea("Satellite, Ahmedabad".into()));
    assert_eq!(criteria.city, CityFilter::City(City::Ahmedabad));
}

#[test]
fn last_entry_point_wins_without_merging() {
    let mut criteria = SearchCriteria::default();

    criteria.apply(CriteriaUpdate::Search {
        city: CityFilter::City(City::Ahmedabad),
        date: "2025-06-01".into(),
        time: "06:00 AM".into(),
    });
    criteria.apply(CriteriaUpdate::QuickCity(CityFilter::City(City::Surat)));

    // The quick selector supplies the full triple, reusing current date/time.
    assert_eq!(criteria.city, CityFilter::City(City::Surat));
    assert_eq!(criteria.date, "2025-06-01");
    assert_eq!(criteria.time, "06:00 AM");

    criteria.apply(CriteriaUpdate::Search {
        city: CityFilter::All,
        date: String::new(),
        time: ANY_TIME.into(),
    });
    assert_eq!(criteria, SearchCriteria::default());
}

#[test]
fn quick_area_reuses_current_date_and_time() {
    let mut criteria = SearchCriteria {
        city: CityFilter::All,
        date: "2025-08-30".into(),
        time: "08:00 PM".into(),
    };
    criteria.apply(CriteriaUpdate::QuickArea("Adajan, Surat".into()));
    assert_eq!(criteria.city, CityFilter::City(City::Surat));
    assert_eq!(criteria.date, "2025-08-30");
    assert_eq!(criteria.time, "08:00 PM");
}
