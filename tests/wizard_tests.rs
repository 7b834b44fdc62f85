mod common;

use car_rental::booking::{BookingWizard, RecordingLinkOpener, TransitionError, WizardStep};
use car_rental::catalog::{fallback_cars, Catalog};
use car_rental::domain::BookingField;
use car_rental::errors::BookingError;
use regex::Regex;

use common::{default_options, english};

fn fill(wizard: &mut BookingWizard, pairs: &[(BookingField, &str)]) {
    for (field, value) in pairs {
        wizard.set_field(*field, value).unwrap();
    }
}

fn details() -> Vec<(BookingField, &'static str)> {
    vec![
        (BookingField::PickupLocation, "Faro Airport"),
        (BookingField::DropoffLocation, "Faro Airport"),
        (BookingField::PickupDate, "2026-01-27"),
        (BookingField::ReturnDate, "2026-01-30"),
    ]
}

fn contact() -> Vec<(BookingField, &'static str)> {
    vec![
        (BookingField::FirstName, "Ana"),
        (BookingField::LastName, "Silva"),
        (BookingField::Email, "ana@example.com"),
        (BookingField::Phone, "+351 912 000 000"),
    ]
}

#[test]
fn contact_step_is_blocked_without_email() {
    let catalog = Catalog::new(fallback_cars());
    let mut wizard = BookingWizard::new(english());
    fill(&mut wizard, &details());
    wizard.advance().unwrap();
    wizard.select_car(&catalog, "1").unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), WizardStep::Contact);

    fill(
        &mut wizard,
        &[
            (BookingField::FirstName, "Ana"),
            (BookingField::LastName, "Silva"),
            (BookingField::Email, ""),
            (BookingField::Phone, "+351 912 000 000"),
        ],
    );
    assert!(!wizard.can_advance());
    assert_eq!(
        wizard.advance(),
        Err(TransitionError::ValidationFailed {
            step: WizardStep::Contact,
            missing: vec![BookingField::Email],
        })
    );
    assert_eq!(wizard.step(), WizardStep::Contact);
}

#[test]
fn whitespace_only_values_do_not_satisfy_a_step() {
    let mut wizard = BookingWizard::new(english());
    fill(&mut wizard, &details());
    wizard.set_field(BookingField::PickupDate, "   ").unwrap();
    assert_eq!(wizard.missing_fields(), vec![BookingField::PickupDate]);
}

#[test]
fn back_is_unguarded_and_keeps_the_draft() {
    let catalog = Catalog::new(fallback_cars());
    let mut wizard = BookingWizard::new(english());
    assert_eq!(wizard.back(), Err(TransitionError::NoPreviousStep));

    fill(&mut wizard, &details());
    wizard.advance().unwrap();
    wizard.select_car(&catalog, "3").unwrap();
    wizard.set_field(BookingField::PickupLocation, "").unwrap();
    assert_eq!(wizard.back(), Ok(WizardStep::Details));
    assert_eq!(wizard.draft().selected_car_id, "3");
    assert!(!wizard.can_advance());
}

#[test]
fn unknown_car_is_rejected() {
    let catalog = Catalog::new(fallback_cars());
    let mut wizard = BookingWizard::new(english());
    let err = wizard.select_car(&catalog, "99").unwrap_err();
    assert!(matches!(err, BookingError::UnknownCar(id) if id == "99"));
    assert!(wizard.draft().selected_car_id.is_empty());
}

#[test]
fn seeding_fills_details_but_not_contact() {
    let wizard = BookingWizard::seeded(
        english(),
        "?pickupLocation=Faro+Airport&dropoffLocation=Lagos&pickupDate=2026-01-27\
         &returnDate=2026-01-30&carType=SUV&email=x%40y.z",
    );
    let draft = wizard.draft();
    assert_eq!(draft.pickup_location, "Faro Airport");
    assert_eq!(draft.car_type, "SUV");
    assert!(draft.email.is_empty());
    assert!(wizard.can_advance());
}

#[test]
fn full_flow_hands_off_to_whatsapp() {
    let catalog = Catalog::new(fallback_cars());
    let opener = RecordingLinkOpener::new();
    let mut wizard = BookingWizard::new(english());

    fill(&mut wizard, &details());
    assert_eq!(wizard.advance(), Ok(WizardStep::Car));
    wizard.select_car(&catalog, "4").unwrap();
    assert_eq!(wizard.advance(), Ok(WizardStep::Contact));
    fill(&mut wizard, &contact());
    assert_eq!(wizard.advance(), Ok(WizardStep::Summary));
    assert_eq!(wizard.advance(), Err(TransitionError::FinalStep));

    let receipt = wizard
        .submit(&catalog, &default_options(), &opener)
        .unwrap();
    assert_eq!(receipt.summary.total, 255.0);
    assert!(receipt.message.contains("€255.00"));

    let opened = opener.opened();
    assert_eq!(opened.len(), 1);
    let shape = Regex::new(r"^https://wa\.me/351912345678\?text=[A-Za-z0-9%._~-]+$").unwrap();
    assert!(shape.is_match(&opened[0]), "{}", opened[0]);
    assert!(opened[0].contains("Vehicle%3A%20BMW%20X1"));
}

#[test]
fn submit_is_only_valid_at_summary() {
    let catalog = Catalog::new(fallback_cars());
    let opener = RecordingLinkOpener::new();
    let wizard = BookingWizard::new(english());
    let err = wizard
        .submit(&catalog, &default_options(), &opener)
        .unwrap_err();
    assert!(matches!(
        err,
        BookingError::Transition(TransitionError::NotAtSummary(WizardStep::Details))
    ));
    assert!(opener.opened().is_empty());
}
