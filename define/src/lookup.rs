//! The results screen: one lookup per navigation, rendered from whichever
//! request was started last.

use dictionary::{DictionaryError, NotFoundError, Word, WordSource};
use tracing::{debug, warn};

use crate::route::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    /// Reached the results screen without anything to look up.
    NoQuery,
    Loading { word: String },
    Found(Word),
    /// A well-formed entry that lists no meanings.
    EmptyMeanings(Word),
    NotFound { word: String, reason: NotFoundError },
    /// Transport, timeout, status or parse failure.
    Failed { word: String, reason: String },
}

impl LookupState {
    /// Whether the lookup ended without anything to show for the word.
    pub fn is_failure(&self) -> bool {
        matches!(self, LookupState::NotFound { .. } | LookupState::Failed { .. })
    }
}

/// Identifies one request. Only the ticket of the latest request may settle.
#[derive(Debug)]
pub struct Ticket {
    generation: u64,
    word: String,
}

impl Ticket {
    pub fn word(&self) -> &str {
        &self.word
    }
}

#[derive(Debug)]
pub struct LookupMachine {
    generation: u64,
    state: LookupState,
}

impl Default for LookupMachine {
    fn default() -> Self {
        Self {
            generation: 0,
            state: LookupState::NoQuery,
        }
    }
}

impl LookupMachine {
    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Starts a lookup for `query`, superseding anything still in flight.
    /// Returns `None` when there is nothing to fetch.
    pub fn begin(&mut self, query: Option<&str>) -> Option<Ticket> {
        self.generation += 1;
        match query {
            Some(word) if !word.is_empty() => {
                self.state = LookupState::Loading {
                    word: word.to_owned(),
                };
                Some(Ticket {
                    generation: self.generation,
                    word: word.to_owned(),
                })
            }
            _ => {
                self.state = LookupState::NoQuery;
                None
            }
        }
    }

    /// Applies the outcome of a request. Returns false and leaves the state
    /// untouched if a newer lookup has started since `ticket` was issued.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<Word, DictionaryError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                word = %ticket.word,
                stale = ticket.generation,
                current = self.generation,
                "dropping superseded lookup"
            );
            return false;
        }
        self.state = match outcome {
            Ok(word) if word.meanings.is_empty() => LookupState::EmptyMeanings(word),
            Ok(word) => LookupState::Found(word),
            Err(DictionaryError::NotFound(reason)) => LookupState::NotFound {
                word: ticket.word,
                reason,
            },
            Err(error) => {
                warn!(word = %ticket.word, %error, "lookup failed");
                LookupState::Failed {
                    word: ticket.word,
                    reason: error.to_string(),
                }
            }
        };
        true
    }
}

/// Performs the request for `ticket` without touching any screen state.
pub async fn fetch<S>(source: &S, ticket: Ticket) -> (Ticket, Result<Word, DictionaryError>)
where
    S: WordSource + ?Sized,
{
    let outcome = source.get_definition(&ticket.word).await;
    (ticket, outcome)
}

pub struct ResultsScreen<S> {
    source: S,
    machine: LookupMachine,
}

impl<S: WordSource> ResultsScreen<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            machine: LookupMachine::default(),
        }
    }

    pub fn state(&self) -> &LookupState {
        self.machine.state()
    }

    /// Navigates to `route`. Returns the ticket to load when there is a word
    /// to look up; the screen is then in its loading state.
    pub fn navigate(&mut self, route: &Route) -> Option<Ticket> {
        self.machine.begin(route.word())
    }

    /// Waits for the lookup of `ticket`. Returns whether it was still current.
    pub async fn load(&mut self, ticket: Ticket) -> bool {
        debug!(word = ticket.word(), "looking up");
        let (ticket, outcome) = fetch(&self.source, ticket).await;
        self.machine.settle(ticket, outcome)
    }
}
