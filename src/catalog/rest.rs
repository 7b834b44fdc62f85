use reqwest::blocking::Client;

use crate::domain::Car;
use crate::errors::CatalogError;

use super::CarCatalog;

/// Reads car rows from the hosted backend's REST interface
/// (`GET {base}/rest/v1/{table}?select=*`).
#[derive(Debug, Clone)]
pub struct RestCatalog {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl RestCatalog {
    pub fn new(base_url: &str, api_key: &str, table: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*",
            self.base_url,
            urlencoding::encode(&self.table)
        )
    }
}

impl CarCatalog for RestCatalog {
    fn fetch_all(&self) -> Result<Vec<Car>, CatalogError> {
        let response = self
            .client
            .get(self.endpoint())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()?
            .error_for_status()?;
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        format!("rest {}", self.endpoint())
    }
}
