//! Card lookups against the Scryfall API, rendered as plain or colorized text.

#![deny(rust_2018_idioms, unused, unused_import_braces, unused_qualifications, warnings)]

use {
    std::{
        fmt,
        io
    },
    derive_more::From
};

pub mod batch;
pub mod card;
pub mod mana;
pub mod search;

pub use crate::{
    batch::{
        print_url,
        run_queries,
        search_url
    },
    card::{
        Card,
        RenderOptions
    },
    search::{
        Client,
        Search
    }
};

#[derive(Debug, From)]
pub enum Error {
    #[from(ignore)]
    Annotated(String, Box<Error>),
    EmptyQuery,
    Io(io::Error),
    Json(serde_json::Error),
    #[from(ignore)]
    MissingData {
        code: Option<String>,
        details: Option<String>
    },
    Reqwest(reqwest::Error),
    UrlParse(url::ParseError)
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Annotated(note, e) => write!(f, "{}: {}", note, e),
            Error::EmptyQuery => write!(f, "search query must not be empty"),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::MissingData { code, details } => {
                write!(f, "unexpected Scryfall response without card data")?;
                if let Some(code) = code { write!(f, " (code {})", code)?; }
                if let Some(details) = details { write!(f, ": {}", details)?; }
                Ok(())
            }
            Error::Reqwest(e) => write!(f, "HTTP error: {}", e),
            Error::UrlParse(e) => write!(f, "invalid URL: {}", e)
        }
    }
}

impl std::error::Error for Error {}

pub trait IntoResultExt {
    type T;

    fn annotate(self, note: impl ToString) -> Self::T;
}

impl<E: Into<Error>> IntoResultExt for E {
    type T = Error;

    fn annotate(self, note: impl ToString) -> Error {
        Error::Annotated(note.to_string(), Box::new(self.into()))
    }
}

impl<T, E: IntoResultExt> IntoResultExt for Result<T, E> {
    type T = Result<T, E::T>;

    fn annotate(self, note: impl ToString) -> Result<T, E::T> {
        self.map_err(|e| e.annotate(note))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn annotated_errors_keep_their_cause() {
        let result: Result<(), Error> = Err(Error::EmptyQuery).annotate("query mode");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "query mode: search query must not be empty");
        assert!(matches!(err, Error::Annotated(_, ref cause) if matches!(**cause, Error::EmptyQuery)));
    }

    #[test]
    fn missing_data_mentions_code_and_details() {
        let err = Error::MissingData {
            code: Some("bad_request".to_owned()),
            details: Some("All of your terms were ignored.".to_owned())
        };
        assert_eq!(
            err.to_string(),
            "unexpected Scryfall response without card data (code bad_request): All of your terms were ignored."
        );
    }
}
