use crate::route::Route;

/// The search form: one text input and a submit action.
#[derive(Debug, Default)]
pub struct HomeScreen {
    query: String,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Binds the input. Only the line terminator of terminal input is dropped.
    pub fn set_query(&mut self, input: &str) {
        self.query = input.trim_end_matches(['\r', '\n']).to_owned();
    }

    /// Where submitting the form navigates to. An empty query is forwarded as is.
    pub fn submit(&self) -> Route {
        Route::define(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_navigates_with_the_encoded_word() {
        let mut home = HomeScreen::new();
        home.set_query("serendipity\n");
        assert_eq!(home.query(), "serendipity");
        assert_eq!(home.submit().to_string(), "/define?word=serendipity");

        home.set_query("look up\r\n");
        assert_eq!(home.submit().to_string(), "/define?word=look%20up");
    }

    #[test]
    fn empty_input_is_still_submitted() {
        let home = HomeScreen::new();
        let route = home.submit();
        assert_eq!(route.to_string(), "/define?word=");
        assert_eq!(route.word(), Some(""));
    }

    #[test]
    fn surrounding_spaces_are_kept() {
        let mut home = HomeScreen::new();
        home.set_query("  cat ");
        assert_eq!(home.submit().word(), Some("  cat "));
    }
}
