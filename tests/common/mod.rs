#![allow(dead_code)]

use chrono::NaiveDate;
use salon_schedule::domain::appointment::{AppointmentStatus, NewAppointment};
use salon_schedule::domain::client::NewClient;
use salon_schedule::domain::types::{ClientId, ClientName};

pub fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("valid date")
}

pub fn new_client(first_name: &str, last_name: &str) -> NewClient {
    NewClient::new(
        ClientName::new(first_name).expect("valid name"),
        ClientName::new(last_name).expect("valid name"),
        "(555) 000-0000".to_string(),
        format!("{}@example.com", first_name.to_lowercase()),
        String::new(),
    )
}

pub fn new_appointment(
    client_id: ClientId,
    day: &str,
    time: &str,
    status: AppointmentStatus,
) -> NewAppointment {
    NewAppointment::new(
        client_id,
        date(day),
        time.parse().expect("valid time"),
        status,
        None,
    )
}
