use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::appointment::{
    Appointment, AppointmentStatus, NewAppointment, UpdateAppointment,
};
use crate::domain::types::{ClientId, TimeOfDay};
use crate::forms::{FormError, normalize_text};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
/// Form data for booking or editing an appointment.
///
/// `time` comes from a time input control and is therefore in 24-hour
/// `"HH:MM"` form.
pub struct AppointmentForm {
    #[validate(range(min = 1))]
    pub client_id: i32,
    /// Calendar day in `YYYY-MM-DD` form.
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub time: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl AppointmentForm {
    /// Prefills the edit form from a stored appointment.
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            client_id: appointment.client_id.get(),
            date: appointment.date.format("%Y-%m-%d").to_string(),
            time: appointment.time.to_24_hour(),
            status: Some(appointment.status.to_string()),
            notes: appointment.notes.clone().unwrap_or_default(),
        }
    }
}

/// Validated appointment input.
#[derive(Debug, Clone)]
pub struct AppointmentPayload {
    pub client_id: ClientId,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl TryFrom<AppointmentForm> for AppointmentPayload {
    type Error = FormError;

    fn try_from(form: AppointmentForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let client_id = ClientId::new(form.client_id).map_err(|_| FormError::InvalidClientId)?;
        let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate)?;
        let time = TimeOfDay::parse_24_hour(&form.time).map_err(|_| FormError::InvalidTime)?;
        let status = match form.status.as_deref().map(str::trim) {
            None | Some("") => AppointmentStatus::default(),
            Some(raw) => raw
                .parse::<AppointmentStatus>()
                .map_err(|_| FormError::InvalidStatus)?,
        };
        let notes = Some(normalize_text(&form.notes)).filter(|n| !n.is_empty());

        Ok(Self {
            client_id,
            date,
            time,
            status,
            notes,
        })
    }
}

impl AppointmentPayload {
    pub fn into_new(self) -> NewAppointment {
        NewAppointment::new(self.client_id, self.date, self.time, self.status, self.notes)
    }

    /// Full replacement of the editable fields, as submitted by the edit form.
    pub fn into_update(self) -> UpdateAppointment {
        UpdateAppointment {
            client_id: Some(self.client_id),
            date: Some(self.date),
            time: Some(self.time),
            status: Some(self.status),
            notes: Some(self.notes.unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AppointmentId;

    fn form(client_id: i32, date: &str, time: &str) -> AppointmentForm {
        AppointmentForm {
            client_id,
            date: date.to_string(),
            time: time.to_string(),
            status: None,
            notes: String::new(),
        }
    }

    #[test]
    fn converts_24_hour_input_and_defaults_to_booked() {
        let payload = AppointmentPayload::try_from(form(3, "2025-11-03", "13:00")).unwrap();
        assert_eq!(payload.time.to_string(), "1:00 PM");
        assert_eq!(payload.status, AppointmentStatus::Booked);
        assert_eq!(payload.notes, None);
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2025, 11, 3).unwrap());
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        assert!(matches!(
            AppointmentPayload::try_from(form(0, "2025-11-03", "13:00")),
            Err(FormError::Validation(_))
        ));
        assert!(matches!(
            AppointmentPayload::try_from(form(1, "", "13:00")),
            Err(FormError::Validation(_))
        ));
        assert!(matches!(
            AppointmentPayload::try_from(form(1, "2025-11-03", "")),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            AppointmentPayload::try_from(form(1, "2025-02-30", "10:00")),
            Err(FormError::InvalidDate)
        ));
        assert!(matches!(
            AppointmentPayload::try_from(form(1, "2025-11-03", "9:00 AM")),
            Err(FormError::InvalidTime)
        ));
        let mut bad_status = form(1, "2025-11-03", "10:00");
        bad_status.status = Some("pending".to_string());
        assert!(matches!(
            AppointmentPayload::try_from(bad_status),
            Err(FormError::InvalidStatus)
        ));
    }

    #[test]
    fn edit_form_prefill_round_trips() {
        let appointment = Appointment {
            id: AppointmentId::new(4).unwrap(),
            client_id: ClientId::new(4).unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            time: "3:10 PM".parse().unwrap(),
            status: AppointmentStatus::Completed,
            notes: Some("Manicure and special".to_string()),
        };

        let form = AppointmentForm::from_appointment(&appointment);
        assert_eq!(form.time, "15:10");
        assert_eq!(form.date, "2025-11-03");

        let payload = AppointmentPayload::try_from(form).unwrap();
        assert_eq!(payload.time, appointment.time);
        assert_eq!(payload.status, AppointmentStatus::Completed);
        assert_eq!(payload.notes, appointment.notes);
    }

    #[test]
    fn notes_keep_markup_characters() {
        let mut input = form(2, "2025-11-04", "10:00");
        input.notes = "  Gel & tips <3 ".to_string();
        let payload = AppointmentPayload::try_from(input).unwrap();
        assert_eq!(payload.notes.as_deref(), Some("Gel & tips <3"));
    }
}
