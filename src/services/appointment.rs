use crate::domain::appointment::{Appointment, AppointmentStatus, UpdateAppointment};
use crate::domain::types::{AppointmentId, ClientId};
use crate::dto::schedule::AppointmentFormPageData;
use crate::forms::appointment::{AppointmentForm, AppointmentPayload};
use crate::repository::{AppointmentReader, AppointmentWriter, ClientListQuery, ClientReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads the client selector and, when editing, the prefilled form.
pub fn load_appointment_form<R>(
    repo: &R,
    appointment_id: Option<AppointmentId>,
    preselected_client: Option<ClientId>,
) -> ServiceResult<AppointmentFormPageData>
where
    R: ClientReader + AppointmentReader + ?Sized,
{
    let clients = repo.list_clients(ClientListQuery::new())?;

    let form = match appointment_id {
        Some(id) => {
            let appointment = repo
                .get_appointment_by_id(id)?
                .ok_or(ServiceError::NotFound)?;
            Some(AppointmentForm::from_appointment(&appointment))
        }
        None => preselected_client.map(|client_id| AppointmentForm {
            client_id: client_id.get(),
            date: String::new(),
            time: String::new(),
            status: Some(AppointmentStatus::Booked.to_string()),
            notes: String::new(),
        }),
    };

    Ok(AppointmentFormPageData { clients, form })
}

fn parse_form(form: AppointmentForm) -> ServiceResult<AppointmentPayload> {
    AppointmentPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::from(err)
    })
}

/// Validates the booking form and stores the appointment.
pub fn add_appointment<R>(repo: &R, form: AppointmentForm) -> ServiceResult<Appointment>
where
    R: AppointmentWriter + ?Sized,
{
    let payload = parse_form(form)?;

    let appointment = repo
        .create_appointment(&payload.into_new())
        .map_err(|err| {
            log::error!("Failed to add an appointment: {err}");
            err
        })?;

    log::info!(
        "Booked appointment {} for client {} on {} at {}",
        appointment.id,
        appointment.client_id,
        appointment.date,
        appointment.time
    );
    Ok(appointment)
}

/// Validates the edit form and overwrites the appointment's editable fields.
pub fn update_appointment<R>(
    repo: &R,
    appointment_id: AppointmentId,
    form: AppointmentForm,
) -> ServiceResult<Appointment>
where
    R: AppointmentWriter + ?Sized,
{
    let payload = parse_form(form)?;

    repo.update_appointment(appointment_id, &payload.into_update())
        .map_err(|err| {
            log::error!("Failed to update appointment {appointment_id}: {err}");
            ServiceError::from(err)
        })
}

/// Moves an appointment to any status.
pub fn set_appointment_status<R>(
    repo: &R,
    appointment_id: AppointmentId,
    status: AppointmentStatus,
) -> ServiceResult<Appointment>
where
    R: AppointmentWriter + ?Sized,
{
    repo.update_appointment(appointment_id, &UpdateAppointment::default().status(status))
        .map_err(|err| {
            log::error!("Failed to set status of appointment {appointment_id}: {err}");
            ServiceError::from(err)
        })
}

pub fn delete_appointment<R>(repo: &R, appointment_id: AppointmentId) -> ServiceResult<()>
where
    R: AppointmentWriter + ?Sized,
{
    repo.delete_appointment(appointment_id).map_err(|err| {
        log::error!("Failed to delete appointment {appointment_id}: {err}");
        ServiceError::from(err)
    })
}
