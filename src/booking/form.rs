use std::collections::BTreeMap;

/// Fields collected by the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Phone,
    Date,
    Slot,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Date, Field::Slot];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Phone => "Phone Number",
            Field::Date => "Date",
            Field::Slot => "Time Slot",
        }
    }
}

/// Field-level validation failure. These are domain values, recovered locally
/// inside the form; they never abort the surrounding view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
}

impl FieldError {
    /// User-facing message for an error on the given field.
    pub fn message(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, _) => "Name is required",
            (Field::Phone, _) => "Enter a valid phone number",
            (Field::Date, _) => "Please select a date",
            (Field::Slot, _) => "Please select a time slot",
        }
    }
}

/// Raw field values as entered. Preserved verbatim across failed submit
/// attempts and frozen for display once submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFields {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub slot: String,
}

impl BookingFields {
    fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Date => &self.date,
            Field::Slot => &self.slot,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Date => self.date = value,
            Field::Slot => self.slot = value,
        }
    }
}

/// Lifecycle of one form instance. `Submitted` is terminal; closing the modal
/// destroys the instance from either phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

/// Per-modal booking form: collected fields, the current error set, and the
/// editing/submitted phase. Created when a turf is selected for booking and
/// destroyed on close; reopening always starts fresh.
#[derive(Debug, Clone)]
pub struct BookingForm {
    turf_id: u32,
    fields: BookingFields,
    errors: BTreeMap<Field, FieldError>,
    phase: FormPhase,
}

impl BookingForm {
    pub fn new(turf_id: u32) -> Self {
        Self {
            turf_id,
            fields: BookingFields::default(),
            errors: BTreeMap::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn turf_id(&self) -> u32 {
        self.turf_id
    }

    pub fn fields(&self) -> &BookingFields {
        &self.fields
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Stores a field value and clears that field's error immediately, so a
    /// corrected field never shows a stale message while other errors remain.
    /// Ignored once submitted; the fields are frozen for display.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        if self.phase == FormPhase::Submitted {
            return;
        }
        self.fields.set(field, value.into());
        self.errors.remove(&field);
    }

    /// Attempts the `Editing -> Submitted` transition. All field rules are
    /// evaluated independently; on any failure the error map is replaced with
    /// exactly the currently-failing set and the phase stays `Editing`.
    pub fn submit(&mut self) -> FormPhase {
        if self.phase == FormPhase::Submitted {
            return self.phase;
        }
        let errors = validate(&self.fields);
        if errors.is_empty() {
            self.phase = FormPhase::Submitted;
        }
        self.errors = errors;
        self.phase
    }
}

fn validate(fields: &BookingFields) -> BTreeMap<Field, FieldError> {
    let mut errors = BTreeMap::new();
    for field in Field::ALL {
        let value = fields.get(field);
        let failure = match field {
            Field::Phone => (!valid_phone(value)).then_some(FieldError::InvalidFormat),
            _ => value.trim().is_empty().then_some(FieldError::Required),
        };
        if let Some(error) = failure {
            errors.insert(field, error);
        }
    }
    errors
}

/// Accepts an optional leading `+` followed by at least ten characters drawn
/// from digits, spaces, and hyphens.
fn valid_phone(phone: &str) -> bool {
    if phone.trim().is_empty() {
        return false;
    }
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    rest.chars().count() >= 10
        && rest
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch.is_whitespace() || ch == '-')
}
