//! Booking form state machine and the locally-recorded booking intent.

mod form;
mod intent;

pub use form::{BookingFields, BookingForm, Field, FieldError, FormPhase};
pub use intent::BookingIntent;
