//! Wizard steps and the per-step completeness predicate.

use std::fmt;

use crate::config::Language;
use crate::domain::{BookingDraft, BookingField};

/// The four linear stages of the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Details,
    Car,
    Contact,
    Summary,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Details,
        WizardStep::Car,
        WizardStep::Contact,
        WizardStep::Summary,
    ];

    /// 1-based position, for "Step n / 4" headers.
    pub fn number(self) -> usize {
        match self {
            WizardStep::Details => 1,
            WizardStep::Car => 2,
            WizardStep::Contact => 3,
            WizardStep::Summary => 4,
        }
    }

    pub const fn total() -> usize {
        4
    }

    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Details => Some(WizardStep::Car),
            WizardStep::Car => Some(WizardStep::Contact),
            WizardStep::Contact => Some(WizardStep::Summary),
            WizardStep::Summary => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            WizardStep::Details => None,
            WizardStep::Car => Some(WizardStep::Details),
            WizardStep::Contact => Some(WizardStep::Car),
            WizardStep::Summary => Some(WizardStep::Contact),
        }
    }

    /// Fields that must be non-empty before leaving this step.
    pub fn required_fields(self) -> &'static [BookingField] {
        match self {
            WizardStep::Details => &[
                BookingField::PickupLocation,
                BookingField::DropoffLocation,
                BookingField::PickupDate,
                BookingField::ReturnDate,
            ],
            WizardStep::Car => &[BookingField::SelectedCarId],
            WizardStep::Contact => &[
                BookingField::FirstName,
                BookingField::LastName,
                BookingField::Email,
                BookingField::Phone,
            ],
            WizardStep::Summary => &[],
        }
    }

    /// Fields collected on this step, required or not, in prompt order.
    pub fn fields(self) -> &'static [BookingField] {
        match self {
            WizardStep::Details => &[
                BookingField::PickupLocation,
                BookingField::DropoffLocation,
                BookingField::PickupDate,
                BookingField::PickupTime,
                BookingField::ReturnDate,
                BookingField::ReturnTime,
            ],
            WizardStep::Car => &[BookingField::SelectedCarId],
            WizardStep::Contact => &[
                BookingField::FirstName,
                BookingField::LastName,
                BookingField::Email,
                BookingField::Phone,
                BookingField::SpecialRequests,
            ],
            WizardStep::Summary => &[],
        }
    }

    pub fn title(self, language: Language) -> &'static str {
        match (self, language) {
            (WizardStep::Details, Language::En) => "Rental details",
            (WizardStep::Car, Language::En) => "Choose your car",
            (WizardStep::Contact, Language::En) => "Contact information",
            (WizardStep::Summary, Language::En) => "Booking summary",
            (WizardStep::Details, Language::Pt) => "Detalhes do aluguer",
            (WizardStep::Car, Language::Pt) => "Escolha o seu carro",
            (WizardStep::Contact, Language::Pt) => "Informação de contacto",
            (WizardStep::Summary, Language::Pt) => "Resumo da reserva",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WizardStep::Details => "details",
            WizardStep::Car => "car",
            WizardStep::Contact => "contact",
            WizardStep::Summary => "summary",
        };
        f.write_str(label)
    }
}

/// Required fields of `step` that are still empty, in declaration order.
pub fn missing_fields(step: WizardStep, draft: &BookingDraft) -> Vec<BookingField> {
    step.required_fields()
        .iter()
        .copied()
        .filter(|field| !draft.is_set(*field))
        .collect()
}

/// Presence check only: values are not checked for syntax or plausibility.
pub fn is_step_complete(step: WizardStep, draft: &BookingDraft) -> bool {
    missing_fields(step, draft).is_empty()
}
