// https://dictionaryapi.dev/ - free, no key. Success is a JSON array of entries,
// a failed lookup is `{ title, message, resolution }`.

use std::fmt;

use serde::{
    de::{value::MapAccessDeserializer, IgnoredAny, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer,
};
use tracing::{debug, warn};

use crate::{
    DictionaryError, NotFoundError, PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning,
};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Builds the lookup url for `word`, percent-encoding it as a single path segment.
pub(crate) fn definition_url(base_url: &str, word: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(word)
    )
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Word, DictionaryError> {
    let url = definition_url(base_url, word);
    debug!(%url, "fetching definition");
    let res: reqwest::Response = client
        .get(&url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if !status.is_success() {
        warn!(%url, %status, "dictionary api returned a non-success status");
        return Err(DictionaryError::Status(status));
    }
    let payload = res
        .json::<ApiPayload>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    payload.into_word()
}

/// The first element of the body. The body is either a list of entries or,
/// for some failures, a bare error object; later list elements are skipped
/// without being decoded.
#[derive(Debug)]
pub(crate) struct ApiPayload {
    first: Option<ApiEntry>,
}

impl<'de> Deserialize<'de> for ApiPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = ApiPayload;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of dictionary entries or an error object")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let first = seq.next_element::<ApiEntry>()?;
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(ApiPayload { first })
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let entry = ApiEntry::deserialize(MapAccessDeserializer::new(map))?;
        Ok(ApiPayload { first: Some(entry) })
    }
}

/// An element is an error exactly when it carries a `title`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiEntry {
    NotFound(ApiNotFound),
    Word(ApiWord),
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiNotFound {
    title: String,
    message: Option<String>,
    resolution: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiWord {
    word: String,
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    origin: Option<String>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
    #[serde(default)]
    source_urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPhonetic {
    text: Option<String>,
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiMeaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiDefinition {
    definition: String,
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

impl ApiPayload {
    pub(crate) fn into_word(self) -> Result<Word, DictionaryError> {
        match self.first {
            Some(ApiEntry::Word(word)) => Ok(word.into()),
            Some(ApiEntry::NotFound(not_found)) => Err(DictionaryError::NotFound(NotFoundError {
                title: Some(not_found.title),
                message: not_found.message,
                resolution: not_found.resolution,
            })),
            None => Err(DictionaryError::NotFound(NotFoundError::default())),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl From<ApiWord> for Word {
    fn from(word: ApiWord) -> Self {
        Word {
            word: word.word,
            phonetic: non_empty(word.phonetic),
            phonetics: word
                .phonetics
                .into_iter()
                .map(|phonetic| Phonetic {
                    text: non_empty(phonetic.text),
                    audio: non_empty(phonetic.audio),
                })
                .filter(|phonetic| phonetic.text.is_some() || phonetic.audio.is_some())
                .collect(),
            origin: non_empty(word.origin),
            meanings: word.meanings.into_iter().map(Into::into).collect(),
            source_urls: word.source_urls,
        }
    }
}

impl From<ApiMeaning> for WordMeaning {
    fn from(meaning: ApiMeaning) -> Self {
        WordMeaning {
            part_of_speech: PartOfSpeech::from(&meaning.part_of_speech[..]),
            definitions: meaning
                .definitions
                .into_iter()
                .map(|definition| WordDefinition {
                    definition: definition.definition,
                    example: non_empty(definition.example),
                    synonyms: definition.synonyms,
                    antonyms: definition.antonyms,
                })
                .collect(),
            synonyms: meaning.synonyms,
            antonyms: meaning.antonyms,
        }
    }
}
