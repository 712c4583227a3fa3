use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contact record as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub number: String,
}

#[derive(Debug, Serialize)]
struct CreatePerson<'a> {
    name: &'a str,
    number: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Errors returned by [`PhonebookClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    /// Status code of an API error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

pub struct PhonebookClient {
    client: Client,
    base_url: String,
}

impl PhonebookClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch every stored record.
    pub async fn list(&self) -> ClientResult<Vec<Person>> {
        let resp = self
            .client
            .get(format!("{}/api/persons", self.base_url))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// Fetch a single record by id.
    pub async fn get(&self, id: u64) -> ClientResult<Person> {
        let resp = self
            .client
            .get(format!("{}/api/persons/{}", self.base_url, id))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// Create a record. The server assigns the id.
    pub async fn create(&self, name: &str, number: &str) -> ClientResult<Person> {
        let resp = self
            .client
            .post(format!("{}/api/persons", self.base_url))
            .json(&CreatePerson { name, number })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// Delete a record. Succeeds whether or not the id existed.
    pub async fn delete(&self, id: u64) -> ClientResult<()> {
        let resp = self
            .client
            .delete(format!("{}/api/persons/{}", self.base_url, id))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// Fetch the HTML info page.
    pub async fn info(&self) -> ClientResult<String> {
        let resp = self
            .client
            .get(format!("{}/info", self.base_url))
            .send()
            .await?;
        Ok(check(resp).await?.text().await?)
    }
}

async fn check(resp: Response) -> ClientResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await?;
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) => text,
    };
    Err(ClientError::Api { status, message })
}
