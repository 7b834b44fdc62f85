//! Booking core: pricing, step validation, the wizard state machine, the
//! booking message and the messaging handoff.

pub mod handoff;
pub mod message;
pub mod pricing;
pub mod steps;
pub mod wizard;

pub use handoff::{
    hand_off, EchoLinkOpener, LinkOpener, RecordingLinkOpener, SystemLinkOpener, WhatsAppLink,
};
pub use message::{format_booking_message, BookingSummary};
pub use pricing::{calculate_days, calculate_total, format_price, Quote, FALLBACK_DAILY_RATE};
pub use steps::{is_step_complete, missing_fields, WizardStep};
pub use wizard::{BookingWizard, HandoffReceipt, SubmitOptions, TransitionError};
