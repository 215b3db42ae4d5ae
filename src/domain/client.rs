use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, ClientName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub first_name: ClientName,
    pub last_name: ClientName,
    pub phone: String,
    pub email: String,
    /// Free-text notes about the client's tastes and sensitivities.
    pub preferences: String,
    pub is_banned: bool,
}

impl Client {
    /// Builds a freshly registered client; new clients are never banned.
    pub fn from_new(id: ClientId, new_client: &NewClient) -> Self {
        Self {
            id,
            first_name: new_client.first_name.clone(),
            last_name: new_client.last_name.clone(),
            phone: new_client.phone.clone(),
            email: new_client.email.clone(),
            preferences: new_client.preferences.clone(),
            is_banned: false,
        }
    }

    /// `"First Last"` as shown in lists and headers.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Merges every field present in `updates` onto this client.
    pub fn apply(&mut self, updates: &UpdateClient) {
        if let Some(first_name) = &updates.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &updates.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(phone) = &updates.phone {
            self.phone = phone.clone();
        }
        if let Some(email) = &updates.email {
            self.email = email.clone();
        }
        if let Some(preferences) = &updates.preferences {
            self.preferences = preferences.clone();
        }
        if let Some(is_banned) = updates.is_banned {
            self.is_banned = is_banned;
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub first_name: ClientName,
    pub last_name: ClientName,
    pub phone: String,
    pub email: String,
    pub preferences: String,
}

impl NewClient {
    #[must_use]
    pub fn new(
        first_name: ClientName,
        last_name: ClientName,
        phone: String,
        email: String,
        preferences: String,
    ) -> Self {
        Self {
            first_name,
            last_name,
            phone: phone.trim().to_string(),
            email: email.trim().to_lowercase(),
            preferences: preferences.trim().to_string(),
        }
    }
}

/// Partial update for a client; `None` leaves the field untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateClient {
    pub first_name: Option<ClientName>,
    pub last_name: Option<ClientName>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub preferences: Option<String>,
    pub is_banned: Option<bool>,
}

impl UpdateClient {
    pub fn preferences(mut self, preferences: impl Into<String>) -> Self {
        self.preferences = Some(preferences.into().trim().to_string());
        self
    }

    pub fn banned(mut self, is_banned: bool) -> Self {
        self.is_banned = Some(is_banned);
        self
    }

    pub fn contact(mut self, phone: impl Into<String>, email: impl Into<String>) -> Self {
        self.phone = Some(phone.into().trim().to_string());
        self.email = Some(email.into().trim().to_lowercase());
        self
    }

    pub fn name(mut self, first_name: ClientName, last_name: ClientName) -> Self {
        self.first_name = Some(first_name);
        self.last_name = Some(last_name);
        self
    }
}
