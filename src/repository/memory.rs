//! In-process schedule store.
//!
//! Holds clients and appointments in insertion order for the lifetime of the
//! process. All operations run synchronously to completion; the store is
//! single-threaded and deliberately not `Sync`.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::domain::appointment::{Appointment, AppointmentStatus, NewAppointment, UpdateAppointment};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::{AppointmentId, ClientId};
use crate::fixtures;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AppointmentReader, AppointmentWriter, ClientListQuery, ClientReader, ClientWriter,
};

/// Point-in-time copy of both collections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    pub clients: Vec<Client>,
    pub appointments: Vec<Appointment>,
}

#[derive(Debug)]
struct ScheduleState {
    clients: Vec<Client>,
    appointments: Vec<Appointment>,
    /// `None` once every positive id has been handed out.
    next_client_id: Option<i32>,
    next_appointment_id: Option<i32>,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            clients: Vec::new(),
            appointments: Vec::new(),
            next_client_id: Some(1),
            next_appointment_id: Some(1),
        }
    }
}

/// Hands out the next value of a monotonic id counter.
fn allocate(counter: &mut Option<i32>) -> RepositoryResult<i32> {
    let id = (*counter).ok_or_else(|| RepositoryError::Unexpected("id space exhausted".to_string()))?;
    *counter = id.checked_add(1);
    Ok(id)
}

/// Checks preloaded ids for repeats and returns the first id after the highest.
fn next_free_id(kind: &str, ids: impl Iterator<Item = i32>) -> RepositoryResult<Option<i32>> {
    let mut seen = HashSet::new();
    let mut highest = 0;
    for id in ids {
        if !seen.insert(id) {
            return Err(RepositoryError::ValidationError(format!(
                "duplicate {kind} id {id}"
            )));
        }
        highest = highest.max(id);
    }
    Ok(highest.checked_add(1))
}

/// Shared handle to the in-memory schedule. Clones refer to the same state.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    state: Rc<RefCell<ScheduleState>>,
}

impl InMemoryRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given records. Id counters continue after
    /// the highest id present.
    ///
    /// Fails when an id repeats within a collection.
    pub fn with_data(clients: Vec<Client>, appointments: Vec<Appointment>) -> RepositoryResult<Self> {
        let next_client_id = next_free_id("client", clients.iter().map(|c| c.id.get()))?;
        let next_appointment_id =
            next_free_id("appointment", appointments.iter().map(|a| a.id.get()))?;

        Ok(Self {
            state: Rc::new(RefCell::new(ScheduleState {
                clients,
                appointments,
                next_client_id,
                next_appointment_id,
            })),
        })
    }

    /// Store loaded with the bundled demo clients and appointments.
    pub fn seeded() -> RepositoryResult<Self> {
        let clients = fixtures::clients()?;
        let appointments = fixtures::appointments()?;
        log::info!(
            "Seeding schedule with {} clients and {} appointments",
            clients.len(),
            appointments.len()
        );
        Self::with_data(clients, appointments)
    }

    pub fn snapshot(&self) -> ScheduleSnapshot {
        let state = self.state.borrow();
        ScheduleSnapshot {
            clients: state.clients.clone(),
            appointments: state.appointments.clone(),
        }
    }
}

impl ClientReader for InMemoryRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let state = self.state.borrow();
        Ok(state.clients.iter().find(|c| c.id == id).cloned())
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<Vec<Client>> {
        let state = self.state.borrow();
        let needle = query.search.map(|s| s.to_lowercase());

        let clients = state
            .clients
            .iter()
            .filter(|client| match &needle {
                Some(needle) => client.full_name().to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect();

        Ok(clients)
    }
}

impl ClientWriter for InMemoryRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut state = self.state.borrow_mut();
        let id = ClientId::new(allocate(&mut state.next_client_id)?)?;
        let client = Client::from_new(id, new_client);
        state.clients.push(client.clone());
        log::debug!("Created client {id}");
        Ok(client)
    }

    fn update_client(
        &self,
        client_id: ClientId,
        updates: &UpdateClient,
    ) -> RepositoryResult<Client> {
        let mut state = self.state.borrow_mut();
        let client = state
            .clients
            .iter_mut()
            .find(|c| c.id == client_id)
            .ok_or(RepositoryError::NotFound)?;
        client.apply(updates);
        Ok(client.clone())
    }

    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()> {
        let mut state = self.state.borrow_mut();
        let position = state
            .clients
            .iter()
            .position(|c| c.id == client_id)
            .ok_or(RepositoryError::NotFound)?;
        state.clients.remove(position);

        let before = state.appointments.len();
        state.appointments.retain(|a| a.client_id != client_id);
        log::info!(
            "Deleted client {client_id} and {} of their appointments",
            before - state.appointments.len()
        );
        Ok(())
    }

    fn ban_client(&self, client_id: ClientId, today: NaiveDate) -> RepositoryResult<usize> {
        // Flag and cascade happen under one borrow so no caller observes a
        // banned client with bookable future appointments.
        let mut state = self.state.borrow_mut();
        let client = state
            .clients
            .iter_mut()
            .find(|c| c.id == client_id)
            .ok_or(RepositoryError::NotFound)?;
        client.is_banned = true;

        let mut affected = 0;
        for appointment in state
            .appointments
            .iter_mut()
            .filter(|a| a.client_id == client_id && a.is_upcoming(today))
        {
            appointment.status = AppointmentStatus::Banned;
            affected += 1;
        }

        log::info!("Banned client {client_id}; {affected} upcoming appointments marked banned");
        Ok(affected)
    }
}

impl AppointmentReader for InMemoryRepository {
    fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>> {
        let state = self.state.borrow();
        Ok(state.appointments.iter().find(|a| a.id == id).cloned())
    }

    fn list_appointments_by_client(
        &self,
        client_id: ClientId,
    ) -> RepositoryResult<Vec<Appointment>> {
        let state = self.state.borrow();
        let mut appointments: Vec<Appointment> = state
            .appointments
            .iter()
            .filter(|a| a.client_id == client_id)
            .cloned()
            .collect();
        // Stable sort keeps insertion order for appointments on the same day.
        appointments.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(appointments)
    }

    fn list_appointments_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Appointment>> {
        let state = self.state.borrow();
        let mut appointments: Vec<Appointment> = state
            .appointments
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect();
        appointments.sort_by_key(|a| a.time);
        Ok(appointments)
    }

    fn has_appointments_on(&self, date: NaiveDate) -> RepositoryResult<bool> {
        let state = self.state.borrow();
        Ok(state.appointments.iter().any(|a| a.date == date))
    }
}

impl AppointmentWriter for InMemoryRepository {
    fn create_appointment(
        &self,
        new_appointment: &NewAppointment,
    ) -> RepositoryResult<Appointment> {
        let mut state = self.state.borrow_mut();
        let id = AppointmentId::new(allocate(&mut state.next_appointment_id)?)?;
        let appointment = Appointment::from_new(id, new_appointment);
        state.appointments.push(appointment.clone());
        log::debug!(
            "Created appointment {id} for client {} on {}",
            appointment.client_id,
            appointment.date
        );
        Ok(appointment)
    }

    fn update_appointment(
        &self,
        appointment_id: AppointmentId,
        updates: &UpdateAppointment,
    ) -> RepositoryResult<Appointment> {
        let mut state = self.state.borrow_mut();
        let appointment = state
            .appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
            .ok_or(RepositoryError::NotFound)?;
        appointment.apply(updates);
        Ok(appointment.clone())
    }

    fn delete_appointment(&self, appointment_id: AppointmentId) -> RepositoryResult<()> {
        let mut state = self.state.borrow_mut();
        let position = state
            .appointments
            .iter()
            .position(|a| a.id == appointment_id)
            .ok_or(RepositoryError::NotFound)?;
        state.appointments.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ClientName;

    #[test]
    fn counters_continue_after_seeded_ids() {
        let repo = InMemoryRepository::seeded().unwrap();
        let appointment = repo
            .create_appointment(&NewAppointment::new(
                ClientId::new(2).unwrap(),
                "2025-12-01".parse().unwrap(),
                "10:00 AM".parse().unwrap(),
                AppointmentStatus::Booked,
                None,
            ))
            .unwrap();
        assert_eq!(appointment.id.get(), 11);
    }

    #[test]
    fn clones_share_the_same_state() {
        let repo = InMemoryRepository::new();
        let handle = repo.clone();
        handle
            .create_appointment(&NewAppointment::new(
                ClientId::new(1).unwrap(),
                "2025-12-01".parse().unwrap(),
                "10:00 AM".parse().unwrap(),
                AppointmentStatus::Booked,
                None,
            ))
            .unwrap();
        assert_eq!(repo.snapshot().appointments.len(), 1);
    }

    #[test]
    fn delete_appointment_with_unknown_id_is_not_found() {
        let repo = InMemoryRepository::seeded().unwrap();
        let before = repo.snapshot();
        let result = repo.delete_appointment(AppointmentId::new(999).unwrap());
        assert_eq!(result, Err(RepositoryError::NotFound));
        assert_eq!(repo.snapshot(), before);
    }

    fn client(id: i32) -> Client {
        let new_client = NewClient::new(
            ClientName::new("Ava").unwrap(),
            ClientName::new("Thompson").unwrap(),
            String::new(),
            String::new(),
            String::new(),
        );
        Client::from_new(ClientId::new(id).unwrap(), &new_client)
    }

    fn appointment(id: i32) -> Appointment {
        Appointment::from_new(
            AppointmentId::new(id).unwrap(),
            &NewAppointment::new(
                ClientId::new(1).unwrap(),
                "2025-12-01".parse().unwrap(),
                "10:00 AM".parse().unwrap(),
                AppointmentStatus::Booked,
                None,
            ),
        )
    }

    #[test]
    fn preloading_repeated_client_ids_is_rejected() {
        let result = InMemoryRepository::with_data(vec![client(1), client(1)], Vec::new());
        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    }

    #[test]
    fn preloading_repeated_appointment_ids_is_rejected() {
        let result = InMemoryRepository::with_data(
            vec![client(1)],
            vec![appointment(3), appointment(4), appointment(3)],
        );
        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    }

    #[test]
    fn id_counter_stops_at_the_highest_id_without_overflow() {
        let repo = InMemoryRepository::with_data(vec![client(i32::MAX - 1)], Vec::new()).unwrap();
        let megan = || {
            NewClient::new(
                ClientName::new("Megan").unwrap(),
                ClientName::new("Taylor").unwrap(),
                String::new(),
                String::new(),
                String::new(),
            )
        };

        let created = repo.create_client(&megan()).unwrap();
        assert_eq!(created.id.get(), i32::MAX);

        let before = repo.snapshot();
        assert!(matches!(
            repo.create_client(&megan()),
            Err(RepositoryError::Unexpected(_))
        ));
        assert_eq!(repo.snapshot(), before);

        let full = InMemoryRepository::with_data(vec![client(i32::MAX)], Vec::new()).unwrap();
        assert!(full.create_client(&megan()).is_err());
    }
}
