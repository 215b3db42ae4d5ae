use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::ClientName;
use crate::forms::{FormError, normalize_text};

#[derive(Debug, Deserialize, Validate)]
/// Form data for registering a new client.
pub struct AddClientForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// Free-text notes about the client.
    #[serde(default)]
    pub preferences: String,
}

impl TryFrom<AddClientForm> for NewClient {
    type Error = FormError;

    fn try_from(form: AddClientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let first_name = ClientName::new(form.first_name).map_err(|_| FormError::InvalidName)?;
        let last_name = ClientName::new(form.last_name).map_err(|_| FormError::InvalidName)?;

        Ok(NewClient::new(
            first_name,
            last_name,
            form.phone,
            form.email,
            normalize_text(&form.preferences),
        ))
    }
}

#[derive(Debug, Deserialize)]
/// Form data for editing the preference notes on the client details screen.
pub struct EditPreferencesForm {
    #[serde(default)]
    pub preferences: String,
}

impl From<EditPreferencesForm> for UpdateClient {
    fn from(form: EditPreferencesForm) -> Self {
        UpdateClient::default().preferences(normalize_text(&form.preferences))
    }
}
