//! View state and event handlers.
//!
//! [ViewState] is the single container for everything the view shows: the session pipeline,
//! the age filter, the display index, the viewed history and the history search query.
//! Derived lists are recomputed on every call; the fetched page is small and fixed.

use std::str::FromStr;

use crate::animals::{Age, Pet};
use crate::session::{SessionEvent, SessionState};
use crate::Error;

mod history;
pub mod render;

pub use history::History;

/// Age filter selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AgeFilter {
    #[default]
    All,
    Only(Age),
}

impl AgeFilter {
    pub fn matches(&self, age: &Age) -> bool {
        match self {
            AgeFilter::All => true,
            AgeFilter::Only(wanted) => wanted == age,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AgeFilter::All => "All Ages",
            AgeFilter::Only(age) => age.as_str(),
        }
    }
}

/// `""`, `all` and `all ages` select every pet; anything else selects one age.
impl FromStr for AgeFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("all ages") {
            return Ok(AgeFilter::All);
        }
        Ok(AgeFilter::Only(s.parse()?))
    }
}

impl From<Option<Age>> for AgeFilter {
    fn from(age: Option<Age>) -> Self {
        age.map_or(AgeFilter::All, AgeFilter::Only)
    }
}

/// User input understood by [ViewState::handle].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Filter(AgeFilter),
    Search(String),
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Ok(Command::Next),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "a" | "age" => Ok(Command::Filter(rest.parse().unwrap_or_default())),
            "s" | "search" => Ok(Command::Search(rest.to_string())),
            _ => match line.strip_prefix('/') {
                Some(query) => Ok(Command::Search(query.trim().to_string())),
                None => Err(Error::Simple(format!("unknown command: {line}"))),
            },
        }
    }
}

/// Pets matching `filter`, in their original order.
pub fn filter_pets<'a>(pets: &'a [Pet], filter: &AgeFilter) -> Vec<&'a Pet> {
    pets.iter().filter(|pet| filter.matches(&pet.age)).collect()
}

#[derive(Clone, Debug, Default)]
pub struct ViewState {
    session: SessionState,
    age_filter: AgeFilter,
    index: usize,
    history: History,
    history_query: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view over an already-progressed session.
    pub fn with_session(session: SessionState) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Feeds a pipeline event into the session.
    pub fn apply(&mut self, event: SessionEvent) {
        self.session.apply(event);
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn age_filter(&self) -> &AgeFilter {
        &self.age_filter
    }

    /// Position of the displayed pet within [Self::filtered_pets].
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_query(&self) -> &str {
        &self.history_query
    }

    pub fn filtered_pets(&self) -> Vec<&Pet> {
        filter_pets(self.session.pets(), &self.age_filter)
    }

    /// The displayed pet. `None` while loading or when no pet matches the filter.
    pub fn current_pet(&self) -> Option<&Pet> {
        self.filtered_pets().get(self.index).copied()
    }

    /// Selects a new age filter and goes back to the first matching pet.
    pub fn set_age_filter(&mut self, filter: AgeFilter) {
        self.age_filter = filter;
        self.index = 0;
    }

    /// Records the displayed pet in the history and moves to the next matching pet,
    /// wrapping around at the end. Returns `false` when there is nothing to show.
    pub fn next(&mut self) -> bool {
        let filtered = filter_pets(self.session.pets(), &self.age_filter);
        if filtered.is_empty() {
            return false;
        }

        let index = self.index % filtered.len();
        self.history.push(filtered[index]);
        self.index = (index + 1) % filtered.len();
        true
    }

    pub fn set_history_query(&mut self, query: impl Into<String>) {
        self.history_query = query.into();
    }

    /// History entries matching the search query.
    pub fn visible_history(&self) -> Vec<&Pet> {
        self.history.search(&self.history_query)
    }

    /// Dispatches a user command. Returns `false` when the user asked to quit.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Next => {
                self.next();
            }
            Command::Filter(filter) => self.set_age_filter(filter),
            Command::Search(query) => self.set_history_query(query),
            Command::Quit => return false,
        }
        true
    }

    /// Renders the view. See [render::render].
    pub fn render(&self) -> String {
        render::render(self)
    }
}
