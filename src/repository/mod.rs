use chrono::NaiveDate;

use crate::{
    domain::{
        appointment::{Appointment, NewAppointment, UpdateAppointment},
        client::{Client, NewClient, UpdateClient},
        types::{AppointmentId, ClientId},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use memory::{InMemoryRepository, ScheduleSnapshot};

#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    /// Case-insensitive fragment of `"first last"`.
    pub search: Option<String>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        let search = search.into().trim().to_string();
        self.search = (!search.is_empty()).then_some(search);
        self
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    /// Clients in insertion order, narrowed by the query.
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, client_id: ClientId, updates: &UpdateClient)
    -> RepositoryResult<Client>;
    /// Removes the client together with every appointment referencing it.
    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
    /// Flags the client as banned and marks each of their appointments dated
    /// `today` or later as banned. Returns the number of appointments touched.
    fn ban_client(&self, client_id: ClientId, today: NaiveDate) -> RepositoryResult<usize>;
}

pub trait AppointmentReader {
    fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>>;
    /// Appointments of one client, most recent date first.
    fn list_appointments_by_client(&self, client_id: ClientId)
    -> RepositoryResult<Vec<Appointment>>;
    /// Appointments on one day, earliest time first.
    fn list_appointments_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Appointment>>;
    fn has_appointments_on(&self, date: NaiveDate) -> RepositoryResult<bool>;
}

pub trait AppointmentWriter {
    fn create_appointment(&self, new_appointment: &NewAppointment)
    -> RepositoryResult<Appointment>;
    fn update_appointment(
        &self,
        appointment_id: AppointmentId,
        updates: &UpdateAppointment,
    ) -> RepositoryResult<Appointment>;
    fn delete_appointment(&self, appointment_id: AppointmentId) -> RepositoryResult<()>;
}
