//! The in-memory booking draft collected by the wizard.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Language;

/// Every field the booking wizard can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    PickupLocation,
    DropoffLocation,
    PickupDate,
    PickupTime,
    ReturnDate,
    ReturnTime,
    CarType,
    SelectedCarId,
    FirstName,
    LastName,
    Email,
    Phone,
    SpecialRequests,
}

impl BookingField {
    pub const ALL: [BookingField; 13] = [
        BookingField::PickupLocation,
        BookingField::DropoffLocation,
        BookingField::PickupDate,
        BookingField::PickupTime,
        BookingField::ReturnDate,
        BookingField::ReturnTime,
        BookingField::CarType,
        BookingField::SelectedCarId,
        BookingField::FirstName,
        BookingField::LastName,
        BookingField::Email,
        BookingField::Phone,
        BookingField::SpecialRequests,
    ];

    /// Stable key; for seedable fields this is also the query parameter name.
    pub fn key(self) -> &'static str {
        match self {
            BookingField::PickupLocation => "pickupLocation",
            BookingField::DropoffLocation => "dropoffLocation",
            BookingField::PickupDate => "pickupDate",
            BookingField::PickupTime => "pickupTime",
            BookingField::ReturnDate => "returnDate",
            BookingField::ReturnTime => "returnTime",
            BookingField::CarType => "carType",
            BookingField::SelectedCarId => "selectedCarId",
            BookingField::FirstName => "firstName",
            BookingField::LastName => "lastName",
            BookingField::Email => "email",
            BookingField::Phone => "phone",
            BookingField::SpecialRequests => "specialRequests",
        }
    }

    pub fn from_key(key: &str) -> Option<BookingField> {
        Self::ALL.iter().copied().find(|field| field.key() == key)
    }

    /// Fields that may be pre-populated from the initiating page's query string.
    pub fn seedable(self) -> bool {
        matches!(
            self,
            BookingField::PickupLocation
                | BookingField::DropoffLocation
                | BookingField::PickupDate
                | BookingField::PickupTime
                | BookingField::ReturnDate
                | BookingField::ReturnTime
                | BookingField::CarType
        )
    }

    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::En => match self {
                BookingField::PickupLocation => "Pickup location",
                BookingField::DropoffLocation => "Drop-off location",
                BookingField::PickupDate => "Pickup date",
                BookingField::PickupTime => "Pickup time",
                BookingField::ReturnDate => "Return date",
                BookingField::ReturnTime => "Return time",
                BookingField::CarType => "Car type",
                BookingField::SelectedCarId => "Vehicle",
                BookingField::FirstName => "First name",
                BookingField::LastName => "Last name",
                BookingField::Email => "Email",
                BookingField::Phone => "Phone",
                BookingField::SpecialRequests => "Special requests",
            },
            Language::Pt => match self {
                BookingField::PickupLocation => "Local de levantamento",
                BookingField::DropoffLocation => "Local de devolução",
                BookingField::PickupDate => "Data de levantamento",
                BookingField::PickupTime => "Hora de levantamento",
                BookingField::ReturnDate => "Data de devolução",
                BookingField::ReturnTime => "Hora de devolução",
                BookingField::CarType => "Tipo de carro",
                BookingField::SelectedCarId => "Veículo",
                BookingField::FirstName => "Nome",
                BookingField::LastName => "Apelido",
                BookingField::Email => "Email",
                BookingField::Phone => "Telefone",
                BookingField::SpecialRequests => "Pedidos especiais",
            },
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unsaved booking data. An empty string means the field is not set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub return_date: String,
    pub return_time: String,
    pub car_type: String,
    pub selected_car_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a draft seeded from a query string such as
    /// `pickupLocation=Faro%20Airport&pickupDate=2026-01-27`.
    pub fn from_query(query: &str) -> Self {
        let mut draft = Self::new();
        draft.seed_from_query(query);
        draft
    }

    /// Copies the seedable query parameters into the draft. Values are
    /// decoded but otherwise stored as given; unknown keys are ignored.
    /// Returns the fields that were seeded.
    pub fn seed_from_query(&mut self, query: &str) -> Vec<BookingField> {
        let mut seeded = Vec::new();
        for (key, value) in parse_query(query) {
            let Some(field) = BookingField::from_key(&key) else {
                continue;
            };
            if !field.seedable() {
                continue;
            }
            self.set(field, &value);
            seeded.push(field);
        }
        seeded
    }

    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::PickupLocation => &self.pickup_location,
            BookingField::DropoffLocation => &self.dropoff_location,
            BookingField::PickupDate => &self.pickup_date,
            BookingField::PickupTime => &self.pickup_time,
            BookingField::ReturnDate => &self.return_date,
            BookingField::ReturnTime => &self.return_time,
            BookingField::CarType => &self.car_type,
            BookingField::SelectedCarId => &self.selected_car_id,
            BookingField::FirstName => &self.first_name,
            BookingField::LastName => &self.last_name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::SpecialRequests => &self.special_requests,
        }
    }

    /// Stores a trimmed value for `field`.
    pub fn set(&mut self, field: BookingField, value: &str) {
        let value = value.trim().to_string();
        let slot = match field {
            BookingField::PickupLocation => &mut self.pickup_location,
            BookingField::DropoffLocation => &mut self.dropoff_location,
            BookingField::PickupDate => &mut self.pickup_date,
            BookingField::PickupTime => &mut self.pickup_time,
            BookingField::ReturnDate => &mut self.return_date,
            BookingField::ReturnTime => &mut self.return_time,
            BookingField::CarType => &mut self.car_type,
            BookingField::SelectedCarId => &mut self.selected_car_id,
            BookingField::FirstName => &mut self.first_name,
            BookingField::LastName => &mut self.last_name,
            BookingField::Email => &mut self.email,
            BookingField::Phone => &mut self.phone,
            BookingField::SpecialRequests => &mut self.special_requests,
        };
        *slot = value;
    }

    pub fn is_set(&self, field: BookingField) -> bool {
        !self.get(field).is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.trim().trim_start_matches('?');
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|value| value.into_owned())
        .unwrap_or(spaced)
}
