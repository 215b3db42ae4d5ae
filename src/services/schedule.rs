use chrono::NaiveDate;

use crate::clock::Clock;
use crate::dto::schedule::{DaySchedulePageData, ScheduledAppointment};
use crate::repository::{AppointmentReader, ClientReader};
use crate::services::ServiceResult;

/// Loads the appointments of `date` (today when `None`) in time order.
///
/// Appointments whose client no longer exists are left out.
pub fn load_day_schedule<R, C>(
    repo: &R,
    clock: &C,
    date: Option<NaiveDate>,
) -> ServiceResult<DaySchedulePageData>
where
    R: ClientReader + AppointmentReader + ?Sized,
    C: Clock + ?Sized,
{
    let today = clock.today();
    let date = date.unwrap_or(today);

    let appointments = repo.list_appointments_by_date(date).map_err(|err| {
        log::error!("Failed to load appointments for {date}: {err}");
        err
    })?;

    let mut scheduled = Vec::with_capacity(appointments.len());
    for appointment in appointments {
        match repo.get_client_by_id(appointment.client_id)? {
            Some(client) => scheduled.push(ScheduledAppointment {
                appointment,
                client,
            }),
            None => log::warn!(
                "Skipping appointment {} referencing missing client {}",
                appointment.id,
                appointment.client_id
            ),
        }
    }

    Ok(DaySchedulePageData {
        date,
        is_today: date == today,
        appointments: scheduled,
    })
}
