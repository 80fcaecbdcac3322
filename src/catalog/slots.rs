/// Sentinel meaning no time-of-day restriction in search criteria.
pub const ANY_TIME: &str = "Any Time";

/// Time-slot vocabulary offered by the search form, headed by the sentinel.
pub const SEARCH_TIME_SLOTS: [&str; 18] = [
    ANY_TIME, "05:00 AM", "06:00 AM", "07:00 AM", "08:00 AM", "09:00 AM", "10:00 AM", "11:00 AM",
    "12:00 PM", "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM", "06:00 PM", "07:00 PM", "08:00 PM",
    "09:00 PM", "10:00 PM",
];

/// Time-slot vocabulary offered by the booking form.
pub const BOOKING_TIME_SLOTS: [&str; 16] = [
    "05:00 AM", "06:00 AM", "07:00 AM", "08:00 AM", "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM",
    "02:00 PM", "04:00 PM", "05:00 PM", "06:00 PM", "07:00 PM", "08:00 PM", "09:00 PM", "10:00 PM",
];

/// Quick-filter area labels shown under the search form.
pub const QUICK_AREAS: [&str; 4] = [
    "Satellite, Ahmedabad",
    "Prahlad Nagar, Ahmedabad",
    "Vesu, Surat",
    "Adajan, Surat",
];
