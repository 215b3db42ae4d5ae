//! Mock repository implementations for isolating services in tests.

use chrono::NaiveDate;
use mockall::mock;

use crate::domain::appointment::{Appointment, NewAppointment, UpdateAppointment};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::{AppointmentId, ClientId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AppointmentReader, AppointmentWriter, ClientListQuery, ClientReader, ClientWriter,
};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<Vec<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn update_client(
            &self,
            client_id: ClientId,
            updates: &UpdateClient,
        ) -> RepositoryResult<Client>;
        fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
        fn ban_client(&self, client_id: ClientId, today: NaiveDate) -> RepositoryResult<usize>;
    }

    impl AppointmentReader for Repository {
        fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>>;
        fn list_appointments_by_client(
            &self,
            client_id: ClientId,
        ) -> RepositoryResult<Vec<Appointment>>;
        fn list_appointments_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Appointment>>;
        fn has_appointments_on(&self, date: NaiveDate) -> RepositoryResult<bool>;
    }

    impl AppointmentWriter for Repository {
        fn create_appointment(
            &self,
            new_appointment: &NewAppointment,
        ) -> RepositoryResult<Appointment>;
        fn update_appointment(
            &self,
            appointment_id: AppointmentId,
            updates: &UpdateAppointment,
        ) -> RepositoryResult<Appointment>;
        fn delete_appointment(&self, appointment_id: AppointmentId) -> RepositoryResult<()>;
    }
}
