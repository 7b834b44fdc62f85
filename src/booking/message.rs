//! Renders a completed booking into the localized chat message sent on handoff.

use crate::config::Language;
use crate::domain::{BookingDraft, Car};

use super::pricing::{format_price, Quote};

/// Everything the message needs, already resolved and priced.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub vehicle: String,
    pub rate_per_day: f64,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup: String,
    pub return_at: String,
    pub days: u32,
    pub total: f64,
    pub currency_symbol: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
}

impl BookingSummary {
    /// Combines the draft with the resolved car (if any) and its quote.
    /// Without a car the vehicle falls back to the requested car type.
    pub fn build(
        draft: &BookingDraft,
        car: Option<&Car>,
        quote: &Quote,
        currency_symbol: &str,
        language: Language,
    ) -> Self {
        let vehicle = match car {
            Some(car) => car.display_name(),
            None if !draft.car_type.is_empty() => draft.car_type.clone(),
            None => labels(language).any_vehicle.to_string(),
        };
        Self {
            vehicle,
            rate_per_day: quote.rate_per_day,
            pickup_location: draft.pickup_location.clone(),
            dropoff_location: draft.dropoff_location.clone(),
            pickup: join_date_time(&draft.pickup_date, &draft.pickup_time),
            return_at: join_date_time(&draft.return_date, &draft.return_time),
            days: quote.days,
            total: quote.total,
            currency_symbol: currency_symbol.to_string(),
            name: draft.full_name(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            special_requests: draft.special_requests.clone(),
        }
    }

    pub fn formatted_total(&self) -> String {
        format_price(&self.currency_symbol, self.total)
    }

    pub fn formatted_rate(&self) -> String {
        format_price(&self.currency_symbol, self.rate_per_day)
    }
}

/// Localized message vocabulary, shared with the CLI summary.
pub(crate) struct Labels {
    pub(crate) greeting: &'static str,
    pub(crate) vehicle: &'static str,
    pub(crate) per_day: &'static str,
    pub(crate) pickup_location: &'static str,
    pub(crate) dropoff_location: &'static str,
    pub(crate) pickup: &'static str,
    pub(crate) return_at: &'static str,
    pub(crate) days: &'static str,
    pub(crate) price: &'static str,
    pub(crate) contact: &'static str,
    pub(crate) name: &'static str,
    pub(crate) email: &'static str,
    pub(crate) phone: &'static str,
    pub(crate) special_requests: &'static str,
    pub(crate) any_vehicle: &'static str,
}

const EN: Labels = Labels {
    greeting: "Hello! I would like to book a car.",
    vehicle: "Vehicle",
    per_day: "day",
    pickup_location: "Pickup Location",
    dropoff_location: "Drop-off Location",
    pickup: "Pickup",
    return_at: "Return",
    days: "Rental Days",
    price: "Estimated Price",
    contact: "Contact Information",
    name: "Name",
    email: "Email",
    phone: "Phone",
    special_requests: "Special Requests",
    any_vehicle: "Any available vehicle",
};

const PT: Labels = Labels {
    greeting: "Olá! Gostaria de reservar um carro.",
    vehicle: "Veículo",
    per_day: "dia",
    pickup_location: "Local de Levantamento",
    dropoff_location: "Local de Devolução",
    pickup: "Levantamento",
    return_at: "Devolução",
    days: "Dias de Aluguer",
    price: "Preço Estimado",
    contact: "Informação de Contacto",
    name: "Nome",
    email: "Email",
    phone: "Telefone",
    special_requests: "Pedidos Especiais",
    any_vehicle: "Qualquer veículo disponível",
};

pub(crate) fn labels(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::Pt => &PT,
    }
}

fn join_date_time(date: &str, time: &str) -> String {
    format!("{} {}", date, time).trim().to_string()
}

/// Produces the chat message text. Output depends only on its inputs.
pub fn format_booking_message(summary: &BookingSummary, language: Language) -> String {
    let l = labels(language);
    let mut lines = vec![
        l.greeting.to_string(),
        String::new(),
        format!(
            "🚗 {}: {} ({}/{})",
            l.vehicle,
            summary.vehicle,
            summary.formatted_rate(),
            l.per_day
        ),
        format!("📍 {}: {}", l.pickup_location, summary.pickup_location),
        format!("📍 {}: {}", l.dropoff_location, summary.dropoff_location),
        format!("📅 {}: {}", l.pickup, summary.pickup),
        format!("📅 {}: {}", l.return_at, summary.return_at),
        format!("📆 {}: {}", l.days, summary.days),
        format!("💰 {}: {}", l.price, summary.formatted_total()),
        String::new(),
        format!("👤 {}:", l.contact),
        format!("{}: {}", l.name, summary.name),
        format!("{}: {}", l.email, summary.email),
        format!("{}: {}", l.phone, summary.phone),
    ];
    if !summary.special_requests.trim().is_empty() {
        lines.push(String::new());
        lines.push(format!("📝 {}:", l.special_requests));
        lines.push(summary.special_requests.trim().to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::pricing::FALLBACK_DAILY_RATE;
    use crate::domain::BookingField;

    fn draft() -> BookingDraft {
        let mut draft = BookingDraft::new();
        draft.set(BookingField::PickupLocation, "Faro Airport");
        draft.set(BookingField::DropoffLocation, "Lagos");
        draft.set(BookingField::PickupDate, "2026-01-27");
        draft.set(BookingField::ReturnDate, "2026-01-30");
        draft.set(BookingField::FirstName, "Ana");
        draft.set(BookingField::LastName, "Silva");
        draft.set(BookingField::Email, "ana@example.com");
        draft.set(BookingField::Phone, "+351 912 000 000");
        draft
    }

    #[test]
    fn omits_special_requests_when_empty() {
        let draft = draft();
        let quote = Quote::for_period(&draft.pickup_date, &draft.return_date, None, 50.0);
        let summary = BookingSummary::build(&draft, None, &quote, "€", Language::En);
        let message = format_booking_message(&summary, Language::En);
        assert!(!message.contains("Special Requests"));
        assert!(message.contains("📅 Pickup: 2026-01-27\n"));
    }

    #[test]
    fn falls_back_to_requested_car_type() {
        let mut draft = draft();
        draft.set(BookingField::CarType, "Convertible");
        let quote = Quote::for_period(
            &draft.pickup_date,
            &draft.return_date,
            None,
            FALLBACK_DAILY_RATE,
        );
        let summary = BookingSummary::build(&draft, None, &quote, "€", Language::Pt);
        let message = format_booking_message(&summary, Language::Pt);
        assert!(message.contains("🚗 Veículo: Convertible (€50.00/dia)"));
        assert!(message.contains("💰 Preço Estimado: €150.00"));
    }
}
