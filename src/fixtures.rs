//! Demo data loaded into the schedule at startup.

use chrono::NaiveDate;

use crate::domain::appointment::{Appointment, AppointmentStatus};
use crate::domain::client::Client;
use crate::domain::types::{AppointmentId, ClientId, ClientName, TimeOfDay, TypeConstraintError};

const CLIENTS: [(i32, &str, &str, &str, &str, &str); 10] = [
    (1, "Emily", "Johnson", "(555) 123-4567", "emily.j@example.com", "Prefers gel polish, loves pink shades"),
    (2, "Sophia", "Martinez", "(555) 234-5678", "sophia.m@example.com", "Sensitive cuticles, prefers natural look"),
    (3, "Olivia", "Wilson", "(555) 345-6789", "olivia.w@example.com", "Loves designs and nail art"),
    (4, "Ava", "Thompson", "(555) 456-7890", "ava.t@example.com", "Quick service preferred, always on time"),
    (5, "Isabella", "Garcia", "(555) 567-8901", "isabella.g@example.com", "Allergic to acetone, use alternative removers"),
    (6, "Megan", "Taylor", "(555) 678-9012", "megan.t@example.com", "Enjoys manicure and pedicure combo"),
    (7, "Amanda", "Chen", "(555) 789-0123", "amanda.c@example.com", "Short nails, no extensions"),
    (8, "Rachel", "Kim", "(555) 890-1234", "rachel.k@example.com", "Prefers late afternoon appointments"),
    (9, "Rachel", "Adams", "(555) 901-2345", "rachel.a@example.com", "Enjoys french manicure style"),
    (10, "Jessica", "Wang", "(555) 012-3456", "jessica.w@example.com", "Prefers deep cleaning and massage"),
];

const APPOINTMENTS: [(i32, i32, (i32, u32, u32), &str, AppointmentStatus, &str); 10] = [
    (1, 1, (2025, 11, 3), "9:00 AM", AppointmentStatus::Booked, "Full set gel nails"),
    (2, 2, (2025, 11, 3), "11:30 AM", AppointmentStatus::Booked, "Gel polish removal and manicure"),
    (3, 3, (2025, 11, 3), "1:00 PM", AppointmentStatus::Booked, "Nail art special"),
    (4, 4, (2025, 11, 3), "3:10 PM", AppointmentStatus::Booked, "Manicure and special"),
    (5, 5, (2025, 11, 3), "5:15 PM", AppointmentStatus::Booked, "Pedicure with French tips"),
    (6, 6, (2025, 11, 4), "10:00 AM", AppointmentStatus::Booked, "Spa pedicure"),
    (7, 7, (2025, 11, 5), "2:00 PM", AppointmentStatus::Booked, "Gel manicure"),
    (8, 1, (2025, 10, 15), "2:00 PM", AppointmentStatus::Completed, "Full Set Gel Nails - French manicure accent"),
    (9, 1, (2025, 9, 20), "3:00 PM", AppointmentStatus::Completed, "Gel Polish Manicure - Polish with nude topcoat"),
    (10, 1, (2025, 8, 12), "11:00 AM", AppointmentStatus::Completed, "Nail Repair - Broke finger repair and polish touch-up"),
];

pub fn clients() -> Result<Vec<Client>, TypeConstraintError> {
    CLIENTS
        .iter()
        .map(|&(id, first, last, phone, email, preferences)| {
            Ok(Client {
                id: ClientId::new(id)?,
                first_name: ClientName::new(first)?,
                last_name: ClientName::new(last)?,
                phone: phone.to_string(),
                email: email.to_string(),
                preferences: preferences.to_string(),
                is_banned: false,
            })
        })
        .collect()
}

pub fn appointments() -> Result<Vec<Appointment>, TypeConstraintError> {
    APPOINTMENTS
        .iter()
        .map(|&(id, client_id, (y, m, d), time, status, notes)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| TypeConstraintError::InvalidDate(format!("{y}-{m}-{d}")))?;
            Ok(Appointment {
                id: AppointmentId::new(id)?,
                client_id: ClientId::new(client_id)?,
                date,
                time: TimeOfDay::parse_12_hour(time)?,
                status,
                notes: Some(notes.to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_well_formed() {
        let clients = clients().unwrap();
        let appointments = appointments().unwrap();
        assert_eq!(clients.len(), 10);
        assert_eq!(appointments.len(), 10);
        assert!(
            appointments
                .iter()
                .all(|a| clients.iter().any(|c| c.id == a.client_id))
        );
    }
}
