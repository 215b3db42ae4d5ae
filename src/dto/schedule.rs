//! DTOs for the daily schedule and the appointment form.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::appointment::Appointment;
use crate::domain::client::Client;
use crate::forms::appointment::AppointmentForm;

#[derive(Debug, Clone, Serialize)]
pub struct ScheduledAppointment {
    pub appointment: Appointment,
    pub client: Client,
}

/// Appointments of a single day in time order.
#[derive(Debug, Serialize)]
pub struct DaySchedulePageData {
    pub date: NaiveDate,
    pub is_today: bool,
    pub appointments: Vec<ScheduledAppointment>,
}

/// Data backing the book/edit appointment screen.
#[derive(Debug, Serialize)]
pub struct AppointmentFormPageData {
    /// Clients offered in the client selector.
    pub clients: Vec<Client>,
    /// Prefilled values when editing or when a client was preselected.
    pub form: Option<AppointmentForm>,
}
