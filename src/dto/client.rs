//! DTOs shaped for the client roster and client details screens.

use serde::Serialize;

use crate::domain::appointment::Appointment;
use crate::domain::client::Client;
use crate::domain::types::ClientId;

/// One row of the client roster.
#[derive(Debug, Clone, Serialize)]
pub struct ClientListItem {
    pub client: Client,
    pub next_appointment: Option<Appointment>,
    pub last_appointment: Option<Appointment>,
}

/// Data required to render the client roster.
#[derive(Debug, Serialize)]
pub struct ClientListPageData {
    pub clients: Vec<ClientListItem>,
    /// Search query echoed back when present.
    pub search_query: Option<String>,
}

/// Aggregated data required to render the client details page.
#[derive(Debug, Serialize)]
pub struct ClientPageData {
    pub client: Client,
    pub next_appointment: Option<Appointment>,
    /// Completed appointments, most recent first.
    pub history: Vec<Appointment>,
    pub total_appointments: usize,
}

/// Generic result wrapper for client mutations so callers can navigate easily.
#[derive(Debug, Serialize)]
pub struct ClientOperationOutcome {
    pub client_id: ClientId,
}
