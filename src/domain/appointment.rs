use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AppointmentId, ClientId, TimeOfDay, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client_id: ClientId,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

/// Booking state. Any status may be replaced by any other through an update;
/// the only automatic transition is the ban cascade.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Booked,
    Completed,
    Canceled,
    Banned,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "booked",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Canceled => "canceled",
            AppointmentStatus::Banned => "banned",
        }
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "booked" => Ok(AppointmentStatus::Booked),
            "completed" => Ok(AppointmentStatus::Completed),
            "canceled" | "cancelled" => Ok(AppointmentStatus::Canceled),
            "banned" => Ok(AppointmentStatus::Banned),
            _ => Err(TypeConstraintError::InvalidStatus(s.to_string())),
        }
    }
}

impl Appointment {
    pub fn from_new(id: AppointmentId, new_appointment: &NewAppointment) -> Self {
        Self {
            id,
            client_id: new_appointment.client_id,
            date: new_appointment.date,
            time: new_appointment.time,
            status: new_appointment.status,
            notes: new_appointment.notes.clone(),
        }
    }

    /// An appointment dated today counts as upcoming for the whole day.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }

    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// Merges every field present in `updates` onto this appointment.
    pub fn apply(&mut self, updates: &UpdateAppointment) {
        if let Some(client_id) = updates.client_id {
            self.client_id = client_id;
        }
        if let Some(date) = updates.date {
            self.date = date;
        }
        if let Some(time) = updates.time {
            self.time = time;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
        if let Some(notes) = &updates.notes {
            self.notes = normalize_notes(Some(notes.clone()));
        }
    }
}

fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAppointment {
    pub client_id: ClientId,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl NewAppointment {
    #[must_use]
    pub fn new(
        client_id: ClientId,
        date: NaiveDate,
        time: TimeOfDay,
        status: AppointmentStatus,
        notes: Option<String>,
    ) -> Self {
        Self {
            client_id,
            date,
            time,
            status,
            notes: normalize_notes(notes),
        }
    }
}

/// Partial update for an appointment; `None` leaves the field untouched.
///
/// `notes: Some("")` clears the notes.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateAppointment {
    pub client_id: Option<ClientId>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeOfDay>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

impl UpdateAppointment {
    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn schedule(mut self, date: NaiveDate, time: TimeOfDay) -> Self {
        self.date = Some(date);
        self.time = Some(time);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Earliest appointment dated today or later.
pub fn next_appointment(appointments: &[Appointment], today: NaiveDate) -> Option<&Appointment> {
    appointments
        .iter()
        .filter(|a| a.is_upcoming(today))
        .min_by_key(|a| (a.date, a.time))
}

/// Most recent appointment dated before today.
pub fn last_appointment(appointments: &[Appointment], today: NaiveDate) -> Option<&Appointment> {
    appointments
        .iter()
        .filter(|a| a.is_past(today))
        .max_by_key(|a| (a.date, a.time))
}

/// Completed appointments, most recent first, at most `limit` of them.
pub fn completed_history(appointments: &[Appointment], limit: usize) -> Vec<&Appointment> {
    let mut history: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));
    history.truncate(limit);
    history
}
