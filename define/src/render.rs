use std::fmt;

use dictionary::{Word, WordMeaning};

use crate::lookup::LookupState;

pub const NO_QUERY: &str = "Enter a word to look it up.";
pub const NO_DEFINITIONS_FOR_PART: &str = "No definitions found for this part of speech.";
pub const NO_MEANINGS: &str = "No definitions found.";

/// A lookup state as it is printed on the results screen.
pub struct Page<'a>(pub &'a LookupState);

pub fn render(state: &LookupState) -> String {
    Page(state).to_string()
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_state(out, self.0)
    }
}

fn write_state(out: &mut fmt::Formatter<'_>, state: &LookupState) -> fmt::Result {
    match state {
        LookupState::NoQuery => writeln!(out, "{NO_QUERY}"),
        LookupState::Loading { word } => writeln!(out, "Loading definition for '{word}'..."),
        LookupState::Found(word) => write_word(out, word),
        LookupState::EmptyMeanings(word) => {
            write_header(out, word)?;
            writeln!(out, "  {NO_MEANINGS}")
        }
        LookupState::NotFound { word, reason } => {
            writeln!(out, "No definitions found for '{word}'.")?;
            if let Some(message) = &reason.message {
                writeln!(out, "  {message}")?;
            }
            if let Some(resolution) = &reason.resolution {
                writeln!(out, "  {resolution}")?;
            }
            Ok(())
        }
        LookupState::Failed { word, .. } => writeln!(
            out,
            "Something went wrong while looking up '{word}'. Please try again later."
        ),
    }
}

fn write_header(out: &mut fmt::Formatter<'_>, word: &Word) -> fmt::Result {
    writeln!(out, "Definitions for: {}", word.word)?;
    if let Some(phonetic) = &word.phonetic {
        writeln!(out, "  {phonetic}")?;
    }
    for phonetic in &word.phonetics {
        match (&phonetic.text, &phonetic.audio) {
            (Some(text), Some(audio)) => writeln!(out, "  {text} ({audio})")?,
            (Some(text), None) if word.phonetic.as_ref() != Some(text) => {
                writeln!(out, "  {text}")?
            }
            (None, Some(audio)) => writeln!(out, "  audio: {audio}")?,
            _ => {}
        }
    }
    if let Some(origin) = &word.origin {
        writeln!(out, "  origin: {origin}")?;
    }
    Ok(())
}

fn write_word(out: &mut fmt::Formatter<'_>, word: &Word) -> fmt::Result {
    write_header(out, word)?;
    for meaning in &word.meanings {
        write_meaning(out, meaning)?;
    }
    if !word.source_urls.is_empty() {
        writeln!(out, "  source: {}", word.source_urls.join(", "))?;
    }
    Ok(())
}

fn write_meaning(out: &mut fmt::Formatter<'_>, meaning: &WordMeaning) -> fmt::Result {
    writeln!(out, "    {}:", meaning.part_of_speech)?;
    if meaning.definitions.is_empty() {
        writeln!(out, "        {NO_DEFINITIONS_FOR_PART}")?;
    }
    for definition in &meaning.definitions {
        writeln!(out, "        {}", definition.definition)?;
        if let Some(example) = &definition.example {
            writeln!(out, "          example: {example}")?;
        }
        if !definition.synonyms.is_empty() {
            writeln!(out, "          synonyms: {}", definition.synonyms.join(", "))?;
        }
        if !definition.antonyms.is_empty() {
            writeln!(out, "          antonyms: {}", definition.antonyms.join(", "))?;
        }
    }
    if !meaning.synonyms.is_empty() {
        writeln!(out, "      synonyms: {}", meaning.synonyms.join(", "))?;
    }
    if !meaning.antonyms.is_empty() {
        writeln!(out, "      antonyms: {}", meaning.antonyms.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dictionary::{
        Dictionary, DictionaryOptions, NotFoundError, PartOfSpeech, Phonetic, WordDefinition,
    };

    use super::*;
    use crate::{lookup::ResultsScreen, route::Route};

    async fn render_api_response(word: &str, body: &str) -> String {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", format!("/{word}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;
        let dictionary = Dictionary::with_options(DictionaryOptions {
            api_url: server.url(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();

        let mut screen = ResultsScreen::new(dictionary);
        let ticket = screen.navigate(&Route::define(word)).unwrap();
        assert!(screen.load(ticket).await);
        mock.assert_async().await;
        render(screen.state())
    }

    #[tokio::test]
    async fn api_entry_renders_end_to_end() {
        let out = render_api_response(
            "cat",
            r#"[{"word":"cat","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"A small domesticated feline."}]}]}]"#,
        )
        .await;
        assert!(out.contains("Definitions for: cat"));
        assert!(out.contains("    noun:"));
        assert!(out.contains("A small domesticated feline."));
    }

    #[tokio::test]
    async fn api_error_shape_renders_not_found_end_to_end() {
        let out = render_api_response(
            "qwzx",
            r#"[{"title":"No Definitions Found","message":"Sorry pal.","resolution":"Try the web."}]"#,
        )
        .await;
        assert!(out.contains("No definitions found for 'qwzx'."));
        assert!(out.contains("Sorry pal."));
        assert!(!out.contains("Definitions for:"));
        assert!(!out.contains("noun"));
    }

    fn cat() -> Word {
        Word {
            word: "cat".to_owned(),
            phonetic: None,
            phonetics: vec![],
            origin: None,
            meanings: vec![WordMeaning {
                part_of_speech: PartOfSpeech::Noun,
                definitions: vec![WordDefinition {
                    definition: "A small domesticated feline.".to_owned(),
                    example: None,
                    synonyms: vec![],
                    antonyms: vec![],
                }],
                synonyms: vec![],
                antonyms: vec![],
            }],
            source_urls: vec![],
        }
    }

    #[test]
    fn found_word_lists_heading_part_of_speech_and_definition() {
        let out = render(&LookupState::Found(cat()));
        assert!(out.contains("Definitions for: cat"));
        assert!(out.contains("noun"));
        assert!(out.contains("A small domesticated feline."));
        assert!(!out.contains("example:"));
        assert!(!out.contains("synonyms:"));
        assert!(!out.contains("antonyms:"));
    }

    #[test]
    fn optional_lines_are_printed_when_present() {
        let mut word = cat();
        word.phonetic = Some("/kæt/".to_owned());
        word.phonetics = vec![Phonetic {
            text: Some("/kæt/".to_owned()),
            audio: Some("https://example.org/cat.mp3".to_owned()),
        }];
        word.origin = Some("Old English catt".to_owned());
        let definition = &mut word.meanings[0].definitions[0];
        definition.example = Some("The cat sat on the mat.".to_owned());
        definition.synonyms = vec!["kitty".to_owned(), "puss".to_owned()];
        definition.antonyms = vec!["dog".to_owned()];

        let out = render(&LookupState::Found(word));
        assert_eq!(
            out,
            "Definitions for: cat\n\
             \x20 /kæt/\n\
             \x20 /kæt/ (https://example.org/cat.mp3)\n\
             \x20 origin: Old English catt\n\
             \x20   noun:\n\
             \x20       A small domesticated feline.\n\
             \x20         example: The cat sat on the mat.\n\
             \x20         synonyms: kitty, puss\n\
             \x20         antonyms: dog\n"
        );
    }

    #[test]
    fn meaning_without_definitions_gets_a_notice() {
        let mut word = cat();
        word.meanings.push(WordMeaning {
            part_of_speech: PartOfSpeech::Verb,
            definitions: vec![],
            synonyms: vec![],
            antonyms: vec![],
        });
        let out = render(&LookupState::Found(word));
        assert!(out.contains("verb:"));
        assert_eq!(out.matches(NO_DEFINITIONS_FOR_PART).count(), 1);
    }

    #[test]
    fn empty_meanings_is_not_an_error() {
        let mut word = cat();
        word.meanings.clear();
        let out = render(&LookupState::EmptyMeanings(word));
        assert!(out.contains("Definitions for: cat"));
        assert!(out.contains(NO_MEANINGS));
    }

    #[test]
    fn not_found_shows_no_definition_headings() {
        let out = render(&LookupState::NotFound {
            word: "qwzx".to_owned(),
            reason: NotFoundError {
                title: Some("No Definitions Found".to_owned()),
                message: Some("Sorry pal.".to_owned()),
                resolution: None,
            },
        });
        assert!(out.contains("No definitions found for 'qwzx'."));
        assert!(out.contains("Sorry pal."));
        assert!(!out.contains("Definitions for:"));
    }

    #[test]
    fn failure_and_idle_messages() {
        let out = render(&LookupState::Failed {
            word: "cat".to_owned(),
            reason: "request failed".to_owned(),
        });
        assert!(out.contains("Something went wrong while looking up 'cat'"));
        assert!(!out.contains("Definitions for:"));

        assert_eq!(render(&LookupState::NoQuery), format!("{NO_QUERY}\n"));
        assert!(render(&LookupState::Loading {
            word: "cat".to_owned()
        })
        .starts_with("Loading definition"));
    }
}
