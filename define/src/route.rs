//! Navigation between the two screens. The only thing that crosses from the
//! home screen to the results screen is the `word` query parameter.

use std::fmt;

use thiserror::Error;

pub const DEFINE_PATH: &str = "/define";
const WORD_PARAM: &str = "word";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Define { word: Option<String> },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no screen lives at {0:?}")]
    UnknownPath(String),
    #[error("query parameter {0:?} is not valid utf-8 once decoded")]
    InvalidEncoding(String),
}

impl Route {
    pub fn define(word: &str) -> Self {
        Route::Define {
            word: Some(word.to_owned()),
        }
    }

    /// The query this route carries, if it is a results route with a `word`.
    pub fn word(&self) -> Option<&str> {
        match self {
            Route::Define { word } => word.as_deref(),
            Route::Home => None,
        }
    }

    pub fn parse(route: &str) -> Result<Self, RouteError> {
        let route = route.trim();
        let (path, query) = route.split_once('?').unwrap_or((route, ""));
        match path.trim_end_matches('/') {
            "" => Ok(Route::Home),
            DEFINE_PATH => Ok(Route::Define {
                word: query_param(query, WORD_PARAM)?,
            }),
            other => Err(RouteError::UnknownPath(other.to_owned())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Define { word: None } => f.write_str(DEFINE_PATH),
            Route::Define { word: Some(word) } => write!(
                f,
                "{DEFINE_PATH}?{WORD_PARAM}={}",
                urlencoding::encode(word)
            ),
        }
    }
}

/// First value of `key` in a form-encoded query string.
fn query_param(query: &str, key: &str) -> Result<Option<String>, RouteError> {
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode(name)? == key {
            return decode(value).map(Some);
        }
    }
    Ok(None)
}

fn decode(component: &str) -> Result<String, RouteError> {
    let component = component.replace('+', " ");
    urlencoding::decode(&component)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| RouteError::InvalidEncoding(component.clone()))
}
