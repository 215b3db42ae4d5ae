use crate::clock::Clock;
use crate::domain::appointment::{
    AppointmentStatus, completed_history, last_appointment, next_appointment,
};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::dto::client::{ClientListItem, ClientListPageData, ClientOperationOutcome, ClientPageData};
use crate::forms::client::{AddClientForm, EditPreferencesForm};
use crate::repository::{AppointmentReader, ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the client roster, optionally narrowed by a name search, with each
/// client's next and last appointment.
pub fn load_client_list<R, C>(
    repo: &R,
    clock: &C,
    search: Option<String>,
) -> ServiceResult<ClientListPageData>
where
    R: ClientReader + AppointmentReader + ?Sized,
    C: Clock + ?Sized,
{
    let today = clock.today();
    let search_query = search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut query = ClientListQuery::new();
    if let Some(term) = &search_query {
        query = query.search(term.clone());
    }

    let clients = repo.list_clients(query).map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err
    })?;

    let clients = clients
        .into_iter()
        .map(|client| -> ServiceResult<ClientListItem> {
            let appointments = repo.list_appointments_by_client(client.id)?;
            Ok(ClientListItem {
                next_appointment: next_appointment(&appointments, today).cloned(),
                last_appointment: last_appointment(&appointments, today).cloned(),
                client,
            })
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    Ok(ClientListPageData {
        clients,
        search_query,
    })
}

/// Loads a client with their upcoming appointment and completed history.
///
/// Canceled bookings are not offered as the next appointment here.
pub fn load_client_details<R, C>(
    repo: &R,
    clock: &C,
    client_id: ClientId,
    history_limit: usize,
) -> ServiceResult<ClientPageData>
where
    R: ClientReader + AppointmentReader + ?Sized,
    C: Clock + ?Sized,
{
    let client = repo
        .get_client_by_id(client_id)?
        .ok_or(ServiceError::NotFound)?;

    let appointments = repo.list_appointments_by_client(client_id)?;
    let bookable: Vec<_> = appointments
        .iter()
        .filter(|a| a.status != AppointmentStatus::Canceled)
        .cloned()
        .collect();

    Ok(ClientPageData {
        next_appointment: next_appointment(&bookable, clock.today()).cloned(),
        history: completed_history(&appointments, history_limit)
            .into_iter()
            .cloned()
            .collect(),
        total_appointments: appointments.len(),
        client,
    })
}

/// Validates the add-client form and registers the client.
pub fn add_client<R>(repo: &R, form: AddClientForm) -> ServiceResult<ClientOperationOutcome>
where
    R: ClientWriter + ?Sized,
{
    let new_client = NewClient::try_from(form).map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::from(err)
    })?;

    let client = repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        err
    })?;

    log::info!("Added client {} ({})", client.id, client.full_name());
    Ok(ClientOperationOutcome {
        client_id: client.id,
    })
}

/// Replaces the free-text preference notes of a client.
pub fn update_client_preferences<R>(
    repo: &R,
    client_id: ClientId,
    form: EditPreferencesForm,
) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let updates = UpdateClient::from(form);
    repo.update_client(client_id, &updates)
        .map_err(|err| {
            log::error!("Failed to update client {client_id}: {err}");
            ServiceError::from(err)
        })
}

/// Bans a client, marking their upcoming appointments banned. Returns how many
/// appointments were affected.
pub fn ban_client<R, C>(repo: &R, clock: &C, client_id: ClientId) -> ServiceResult<usize>
where
    R: ClientWriter + ?Sized,
    C: Clock + ?Sized,
{
    repo.ban_client(client_id, clock.today()).map_err(|err| {
        log::error!("Failed to ban client {client_id}: {err}");
        ServiceError::from(err)
    })
}

/// Deletes a client together with all of their appointments.
pub fn delete_client<R>(repo: &R, client_id: ClientId) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    repo.delete_client(client_id).map_err(|err| {
        log::error!("Failed to delete client {client_id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::clock::FixedClock;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    #[test]
    fn ban_passes_today_from_the_clock() {
        let mut repo = MockRepository::new();
        let today = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();

        repo.expect_ban_client()
            .times(1)
            .withf(move |id, day| id.get() == 4 && *day == today)
            .returning(|_, _| Ok(2));

        let affected = ban_client(&repo, &FixedClock(today), ClientId::new(4).unwrap()).unwrap();
        assert_eq!(affected, 2);
    }

    #[test]
    fn details_for_missing_client_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id().returning(|_| Ok(None));
        repo.expect_list_appointments_by_client().never();

        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap());
        let result = load_client_details(&repo, &clock, ClientId::new(42).unwrap(), 5);

        assert_eq!(result.unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn delete_surfaces_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_client()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = delete_client(&repo, ClientId::new(42).unwrap());
        assert_eq!(result, Err(ServiceError::NotFound));
    }
}
