//! Session facade owning the catalog, the search criteria, and the active
//! booking form. Single-threaded by design: each call performs exactly one
//! state transition before returning.

use crate::booking::{BookingForm, BookingIntent, Field, FormPhase};
use crate::catalog::{Catalog, TurfRecord};
use crate::errors::TurfbookError;
use crate::search::{filter_turfs, CriteriaUpdate, FilterSummary, SearchCriteria};

pub struct Session {
    catalog: Catalog,
    criteria: SearchCriteria,
    booking: Option<BookingForm>,
    intents: Vec<BookingIntent>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            criteria: SearchCriteria::default(),
            booking: None,
            intents: Vec::new(),
        }
    }

    pub fn with_bundled_catalog() -> Self {
        Self::new(Catalog::bundled().clone())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Applies one atomic criteria update; the last entry point to fire wins.
    pub fn update_criteria(&mut self, update: CriteriaUpdate) {
        self.criteria.apply(update);
        tracing::debug!(city = %self.criteria.city, "search criteria updated");
    }

    /// Query surface for the listing view.
    pub fn filtered_turfs(&self) -> Vec<&TurfRecord> {
        filter_turfs(&self.catalog, &self.criteria)
    }

    /// Listing header derived from the current filter result.
    pub fn filter_summary(&self) -> FilterSummary {
        let results = self.filtered_turfs();
        FilterSummary::new(&self.criteria, &results)
    }

    /// Starts a fresh booking form for the chosen turf, replacing any form
    /// already open. No state carries over between instances.
    pub fn open_booking(&mut self, turf_id: u32) -> Result<&BookingForm, TurfbookError> {
        if self.catalog.turf(turf_id).is_none() {
            return Err(TurfbookError::UnknownTurf(turf_id));
        }
        tracing::debug!(turf_id, "booking form opened");
        Ok(self.booking.insert(BookingForm::new(turf_id)))
    }

    /// Destroys the active form, from any phase.
    pub fn close_booking(&mut self) {
        if self.booking.take().is_some() {
            tracing::debug!("booking form closed");
        }
    }

    pub fn booking(&self) -> Option<&BookingForm> {
        self.booking.as_ref()
    }

    /// The turf the active form is scoped to.
    pub fn booking_turf(&self) -> Option<&TurfRecord> {
        self.booking
            .as_ref()
            .and_then(|form| self.catalog.turf(form.turf_id()))
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), TurfbookError> {
        let form = self.booking.as_mut().ok_or(TurfbookError::NoActiveBooking)?;
        form.update_field(field, value);
        Ok(())
    }

    /// Attempts to submit the active form. On the transition to `Submitted`
    /// the frozen fields are recorded as a [`BookingIntent`].
    pub fn submit(&mut self) -> Result<FormPhase, TurfbookError> {
        let form = self.booking.as_mut().ok_or(TurfbookError::NoActiveBooking)?;
        if form.phase() == FormPhase::Submitted {
            return Ok(FormPhase::Submitted);
        }
        let phase = form.submit();
        if phase == FormPhase::Submitted {
            let intent = BookingIntent::from_fields(form.turf_id(), form.fields());
            tracing::info!(turf_id = intent.turf_id, slot = %intent.slot, "booking intent recorded");
            self.intents.push(intent);
        } else {
            tracing::debug!(errors = form.errors().len(), "booking submit rejected");
        }
        Ok(phase)
    }

    /// Intents recorded this session, oldest first.
    pub fn intents(&self) -> &[BookingIntent] {
        &self.intents
    }
}
