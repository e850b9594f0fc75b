//! Blocking client for Scryfall's `/cards/search` endpoint.

use {
    std::env,
    log::{
        debug,
        warn
    },
    serde::Deserialize,
    url::Url,
    crate::{
        Error,
        IntoResultExt as _,
        card::Card
    }
};

pub const DEFAULT_API_BASE: &str = "https://api.scryfall.com";
const SEARCH_PATH: &str = "/cards/search";
/// The error code Scryfall uses when a search matched no cards.
pub const NOT_FOUND: &str = "not_found";

/// Anything that can answer a card search. Query mode only depends on this, not on HTTP.
pub trait Search {
    fn search(&self, query: &str) -> Result<Vec<Card>, Error>;
}

/// Either a list object with `data` or an error object with `code`, depending on how the search went.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    code: Option<String>,
    details: Option<String>,
    data: Option<Vec<Card>>
}

impl SearchResponse {
    /// The matching cards in the order Scryfall returned them. A "no matches" error is an empty list.
    pub fn into_cards(self) -> Result<Vec<Card>, Error> {
        if self.code.as_deref() == Some(NOT_FOUND) {
            return Ok(Vec::default())
        }
        match self.data {
            Some(data) => Ok(data),
            None => {
                warn!("Scryfall response has no card data (code {:?})", self.code);
                Err(Error::MissingData { code: self.code, details: self.details })
            }
        }
    }
}

/// Returns the API base URL, which can be overridden with the `SCRYFALL_API` environment variable.
pub fn api_base() -> Result<Url, Error> {
    let base = env::var("SCRYFALL_API").unwrap_or_else(|_| DEFAULT_API_BASE.to_owned());
    Url::parse(&base).annotate("SCRYFALL_API")
}

pub struct Client {
    http: reqwest::blocking::Client,
    endpoint: Url
}

impl Client {
    pub fn new(api_base: &Url) -> Result<Client, Error> {
        let endpoint = Url::parse(&format!("{}{}", api_base.as_str().trim_end_matches('/'), SEARCH_PATH))?;
        debug!("searching cards at {}", endpoint);
        let http = reqwest::blocking::ClientBuilder::new()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Client { http, endpoint })
    }
}

impl Search for Client {
    fn search(&self, query: &str) -> Result<Vec<Card>, Error> {
        if query.is_empty() { return Err(Error::EmptyQuery) }
        debug!("q={}", query);
        // no error_for_status: a search without matches is a 404 with a JSON error object
        let response = self.http.get(self.endpoint.clone())
            .query(&[("q", query)])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;
        let body = response.text()?;
        let response = serde_json::from_str::<SearchResponse>(&body).annotate(format!("decoding results for {}", query))?;
        response.into_cards()
    }
}
