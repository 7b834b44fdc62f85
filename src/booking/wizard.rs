//! Booking wizard state machine.
//!
//! Holds the current [`WizardStep`] and the [`BookingDraft`] being collected.
//! Forward transitions are guarded by the step validator and report what is
//! missing; backward transitions are unguarded. The summary step does not
//! advance further: its action is [`BookingWizard::submit`], which hands the
//! booking off as a pre-filled chat message.

use thiserror::Error;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::AppContext;
use crate::domain::{BookingDraft, BookingField, Car};
use crate::errors::{BookingError, HandoffError};

use super::handoff::{hand_off, LinkOpener, WhatsAppLink};
use super::message::{format_booking_message, BookingSummary};
use super::pricing::Quote;
use super::steps::{is_step_complete, missing_fields, WizardStep};

/// Rejected wizard transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("step `{step}` is incomplete; missing: {}", join_keys(.missing))]
    ValidationFailed {
        step: WizardStep,
        missing: Vec<BookingField>,
    },
    #[error("already at the first step")]
    NoPreviousStep,
    #[error("the summary step has no next step")]
    FinalStep,
    #[error("booking can only be submitted from the summary step (current: `{0}`)")]
    NotAtSummary(WizardStep),
}

fn join_keys(fields: &[BookingField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Settings the handoff needs besides the draft itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOptions<'a> {
    pub destination: &'a str,
    pub currency_symbol: &'a str,
    pub fallback_rate: f64,
}

/// Result of a completed handoff.
#[derive(Debug, Clone, PartialEq)]
pub struct HandoffReceipt {
    pub summary: BookingSummary,
    pub message: String,
    pub link: WhatsAppLink,
}

/// In-memory booking flow with a single owner.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    id: Uuid,
    context: AppContext,
    step: WizardStep,
    draft: BookingDraft,
}

impl BookingWizard {
    pub fn new(context: AppContext) -> Self {
        let wizard = Self {
            id: Uuid::new_v4(),
            context,
            step: WizardStep::Details,
            draft: BookingDraft::new(),
        };
        tracing::debug!(draft_id = %wizard.id, "booking wizard started");
        wizard
    }

    /// Starts a wizard pre-populated once from the initiating page's query string.
    pub fn seeded(context: AppContext, query: &str) -> Self {
        let mut wizard = Self::new(context);
        let seeded = wizard.draft.seed_from_query(query);
        if !seeded.is_empty() {
            tracing::debug!(
                draft_id = %wizard.id,
                fields = %join_keys(&seeded),
                "draft seeded from query"
            );
        }
        wizard
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn context(&self) -> AppContext {
        self.context
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Stores a draft value. The vehicle can only be cleared here; choosing
    /// one goes through [`BookingWizard::select_car`] so the id is checked
    /// against the catalog.
    pub fn set_field(&mut self, field: BookingField, value: &str) -> Result<(), BookingError> {
        if field == BookingField::SelectedCarId && !value.trim().is_empty() {
            return Err(BookingError::UnverifiedCar(value.trim().to_string()));
        }
        self.draft.set(field, value);
        Ok(())
    }

    /// Selects a car, enforcing that the id exists in `catalog`.
    pub fn select_car<'c>(
        &mut self,
        catalog: &'c Catalog,
        car_id: &str,
    ) -> Result<&'c Car, BookingError> {
        let car = catalog
            .find(car_id)
            .ok_or_else(|| BookingError::UnknownCar(car_id.trim().to_string()))?;
        self.draft.set(BookingField::SelectedCarId, &car.id);
        Ok(car)
    }

    /// Whether the "next" affordance should be enabled.
    pub fn can_advance(&self) -> bool {
        self.step.next().is_some() && is_step_complete(self.step, &self.draft)
    }

    pub fn missing_fields(&self) -> Vec<BookingField> {
        missing_fields(self.step, &self.draft)
    }

    /// Moves to the next step when the current one is complete. On error the
    /// wizard stays where it is.
    pub fn advance(&mut self) -> Result<WizardStep, TransitionError> {
        let Some(next) = self.step.next() else {
            return Err(TransitionError::FinalStep);
        };
        let missing = missing_fields(self.step, &self.draft);
        if !missing.is_empty() {
            tracing::debug!(
                draft_id = %self.id,
                step = %self.step,
                missing = %join_keys(&missing),
                "advance rejected"
            );
            return Err(TransitionError::ValidationFailed {
                step: self.step,
                missing,
            });
        }
        self.step = next;
        tracing::debug!(draft_id = %self.id, step = %self.step, "advanced");
        Ok(next)
    }

    pub fn back(&mut self) -> Result<WizardStep, TransitionError> {
        let prev = self.step.prev().ok_or(TransitionError::NoPreviousStep)?;
        self.step = prev;
        tracing::debug!(draft_id = %self.id, step = %self.step, "went back");
        Ok(prev)
    }

    /// Resolves the selected car in `catalog`, if any.
    pub fn selected_car<'c>(&self, catalog: &'c Catalog) -> Option<&'c Car> {
        if self.draft.selected_car_id.is_empty() {
            None
        } else {
            catalog.find(&self.draft.selected_car_id)
        }
    }

    pub fn quote(&self, catalog: &Catalog, fallback_rate: f64) -> Quote {
        Quote::for_period(
            &self.draft.pickup_date,
            &self.draft.return_date,
            self.selected_car(catalog),
            fallback_rate,
        )
    }

    pub fn summary(&self, catalog: &Catalog, options: &SubmitOptions<'_>) -> BookingSummary {
        let quote = self.quote(catalog, options.fallback_rate);
        BookingSummary::build(
            &self.draft,
            self.selected_car(catalog),
            &quote,
            options.currency_symbol,
            self.context.language,
        )
    }

    /// The summary step's primary action: format the booking and open the
    /// pre-filled chat link. Only valid at [`WizardStep::Summary`].
    pub fn submit(
        &self,
        catalog: &Catalog,
        options: &SubmitOptions<'_>,
        opener: &dyn LinkOpener,
    ) -> Result<HandoffReceipt, BookingError> {
        if self.step != WizardStep::Summary {
            return Err(TransitionError::NotAtSummary(self.step).into());
        }
        // Earlier steps may have been edited since they were passed.
        for step in WizardStep::ALL {
            let missing = missing_fields(step, &self.draft);
            if !missing.is_empty() {
                return Err(TransitionError::ValidationFailed { step, missing }.into());
            }
        }
        if self.selected_car(catalog).is_none() {
            return Err(BookingError::UnknownCar(self.draft.selected_car_id.clone()));
        }
        let summary = self.summary(catalog, options);
        let message = format_booking_message(&summary, self.context.language);
        let link = hand_off(options.destination, &message, opener).map_err(|err| {
            if let HandoffError::OpenFailed(reason) = &err {
                tracing::warn!(draft_id = %self.id, %reason, "could not open handoff link");
            }
            err
        })?;
        tracing::info!(draft_id = %self.id, days = summary.days, total = summary.total, "booking submitted");
        Ok(HandoffReceipt {
            summary,
            message,
            link,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::handoff::RecordingLinkOpener;
    use crate::catalog::fallback_cars;

    fn options() -> SubmitOptions<'static> {
        SubmitOptions {
            destination: "+351 912 345 678",
            currency_symbol: "€",
            fallback_rate: 50.0,
        }
    }

    #[test]
    fn starts_at_details_with_empty_draft() {
        let wizard = BookingWizard::new(AppContext::default());
        assert_eq!(wizard.step(), WizardStep::Details);
        assert_eq!(wizard.draft(), &BookingDraft::new());
        assert!(!wizard.can_advance());
    }

    #[test]
    fn advance_is_rejected_until_step_complete() {
        let mut wizard = BookingWizard::seeded(
            AppContext::default(),
            "pickupLocation=Faro%20Airport&pickupDate=2026-01-27",
        );
        let err = wizard.advance().unwrap_err();
        assert_eq!(
            err,
            TransitionError::ValidationFailed {
                step: WizardStep::Details,
                missing: vec![BookingField::DropoffLocation, BookingField::ReturnDate],
            }
        );
        assert_eq!(wizard.step(), WizardStep::Details);

        wizard.set_field(BookingField::DropoffLocation, "Lagos").unwrap();
        wizard.set_field(BookingField::ReturnDate, "2026-01-30").unwrap();
        assert!(wizard.can_advance());
        assert_eq!(wizard.advance(), Ok(WizardStep::Car));
    }

    #[test]
    fn back_is_unguarded_but_stops_at_details() {
        let mut wizard = BookingWizard::new(AppContext::default());
        assert_eq!(wizard.back(), Err(TransitionError::NoPreviousStep));
        wizard.set_field(BookingField::PickupLocation, "Faro Airport").unwrap();
        wizard.set_field(BookingField::DropoffLocation, "Faro Airport").unwrap();
        wizard.set_field(BookingField::PickupDate, "2026-01-27").unwrap();
        wizard.set_field(BookingField::ReturnDate, "2026-01-28").unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.back(), Ok(WizardStep::Details));
    }

    #[test]
    fn select_car_requires_catalog_entry() {
        let catalog = Catalog::new(fallback_cars());
        let mut wizard = BookingWizard::new(AppContext::default());
        assert!(matches!(
            wizard.select_car(&catalog, "missing"),
            Err(BookingError::UnknownCar(_))
        ));
        assert!(wizard.draft().selected_car_id.is_empty());
        wizard.select_car(&catalog, "4").unwrap();
        assert_eq!(wizard.draft().selected_car_id, "4");
    }

    #[test]
    fn submit_outside_summary_is_rejected() {
        let catalog = Catalog::new(fallback_cars());
        let opener = RecordingLinkOpener::new();
        let wizard = BookingWizard::new(AppContext::default());
        let err = wizard.submit(&catalog, &options(), &opener).unwrap_err();
        assert!(matches!(
            err,
            BookingError::Transition(TransitionError::NotAtSummary(WizardStep::Details))
        ));
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn summary_has_no_next_step() {
        let catalog = Catalog::new(fallback_cars());
        let mut wizard = BookingWizard::seeded(
            AppContext::default(),
            "pickupLocation=Lagos&dropoffLocation=Lagos&pickupDate=2026-01-27&returnDate=2026-01-30",
        );
        wizard.advance().unwrap();
        wizard.select_car(&catalog, "1").unwrap();
        wizard.advance().unwrap();
        for (field, value) in [
            (BookingField::FirstName, "Ana"),
            (BookingField::LastName, "Silva"),
            (BookingField::Email, "ana@example.com"),
            (BookingField::Phone, "912000000"),
        ] {
            wizard.set_field(field, value).unwrap();
        }
        assert_eq!(wizard.advance(), Ok(WizardStep::Summary));
        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Err(TransitionError::FinalStep));
        assert_eq!(wizard.quote(&catalog, 50.0).total, 105.0);
    }

    fn wizard_at_summary(catalog: &Catalog) -> BookingWizard {
        let mut wizard = BookingWizard::seeded(
            AppContext::default(),
            "pickupLocation=Lagos&dropoffLocation=Lagos&pickupDate=2026-01-27&returnDate=2026-01-30",
        );
        wizard.advance().unwrap();
        wizard.select_car(catalog, "4").unwrap();
        wizard.advance().unwrap();
        for (field, value) in [
            (BookingField::FirstName, "Ana"),
            (BookingField::LastName, "Silva"),
            (BookingField::Email, "ana@example.com"),
            (BookingField::Phone, "912000000"),
        ] {
            wizard.set_field(field, value).unwrap();
        }
        wizard.advance().unwrap();
        wizard
    }

    #[test]
    fn car_id_cannot_bypass_catalog_check() {
        let catalog = Catalog::new(fallback_cars());
        let mut wizard = BookingWizard::seeded(
            AppContext::default(),
            "pickupLocation=Lagos&dropoffLocation=Lagos&pickupDate=2026-01-27&returnDate=2026-01-30",
        );
        wizard.advance().unwrap();

        let err = wizard
            .set_field(BookingField::SelectedCarId, "ghost-car")
            .unwrap_err();
        assert!(matches!(err, BookingError::UnverifiedCar(id) if id == "ghost-car"));
        assert!(wizard.draft().selected_car_id.is_empty());
        assert_eq!(
            wizard.advance(),
            Err(TransitionError::ValidationFailed {
                step: WizardStep::Car,
                missing: vec![BookingField::SelectedCarId],
            })
        );

        wizard.select_car(&catalog, "2").unwrap();
        wizard.set_field(BookingField::SelectedCarId, "  ").unwrap();
        assert!(wizard.draft().selected_car_id.is_empty());
    }

    #[test]
    fn submit_rechecks_steps_edited_after_passing_them() {
        let catalog = Catalog::new(fallback_cars());
        let opener = RecordingLinkOpener::new();
        let mut wizard = wizard_at_summary(&catalog);
        wizard.set_field(BookingField::PickupLocation, "").unwrap();
        wizard.set_field(BookingField::Email, "").unwrap();

        let err = wizard.submit(&catalog, &options(), &opener).unwrap_err();
        assert!(matches!(
            err,
            BookingError::Transition(TransitionError::ValidationFailed {
                step: WizardStep::Details,
                ref missing,
            }) if missing == &vec![BookingField::PickupLocation]
        ));
        assert!(opener.opened().is_empty());

        wizard.set_field(BookingField::PickupLocation, "Lagos").unwrap();
        let err = wizard.submit(&catalog, &options(), &opener).unwrap_err();
        assert!(matches!(
            err,
            BookingError::Transition(TransitionError::ValidationFailed {
                step: WizardStep::Contact,
                ..
            })
        ));

        wizard.set_field(BookingField::Email, "ana@example.com").unwrap();
        let receipt = wizard.submit(&catalog, &options(), &opener).unwrap();
        assert_eq!(receipt.summary.total, 255.0);
    }

    #[test]
    fn submit_rejects_car_missing_from_catalog() {
        let catalog = Catalog::new(fallback_cars());
        let opener = RecordingLinkOpener::new();
        let wizard = wizard_at_summary(&catalog);
        let other = Catalog::new(Vec::new());

        let err = wizard.submit(&other, &options(), &opener).unwrap_err();
        assert!(matches!(err, BookingError::UnknownCar(id) if id == "4"));
        assert!(opener.opened().is_empty());
    }
}
