//! Plain-text rendering of a [ViewState].
//!
//! Rendering is a pure function of the view state.

use crate::animals::{Age, Pet};

use super::{AgeFilter, ViewState};

pub const TITLE: &str = "🐾 Pets Available for Adoption";
pub const LOADING: &str = "Loading pets...";
pub const NO_MATCHES: &str = "No pets found for selected filter.";
pub const NEXT: &str = "[ Next ➜ ]";
pub const HISTORY_TITLE: &str = "🕘 Previously Viewed";
pub const SEARCH_PLACEHOLDER: &str = "Search viewed pets by name or breed";

/// Renders the whole view: title, age filter, the displayed pet (or a status line), the
/// next control and the searchable history.
///
/// The age filter and the next control only appear once pets are loaded. The history
/// search is always shown.
pub fn render(view: &ViewState) -> String {
    let mut lines = vec![TITLE.to_string(), String::new()];

    if view.is_loading() {
        lines.push(LOADING.to_string());
    } else {
        lines.push(render_age_filter(view.age_filter()));
        lines.push(String::new());
        match view.current_pet() {
            Some(pet) => {
                lines.extend(render_pet_card(pet));
                lines.push(String::new());
                lines.push(NEXT.to_string());
            }
            None => lines.push(NO_MATCHES.to_string()),
        }
    }

    lines.push(String::new());
    lines.push(HISTORY_TITLE.to_string());
    lines.push(render_search_box(view.history_query()));
    for pet in view.visible_history() {
        lines.push(render_history_entry(pet));
    }

    lines.join("\n")
}

/// `Filter by Age:` followed by every option, the selected one in brackets.
pub fn render_age_filter(selected: &AgeFilter) -> String {
    let mut options = vec![AgeFilter::All];
    options.extend(Age::KNOWN.into_iter().map(AgeFilter::Only));
    if !options.contains(selected) {
        options.push(selected.clone());
    }

    let options: Vec<String> = options
        .iter()
        .map(|option| {
            if option == selected {
                format!("[{}]", option.label())
            } else {
                option.label().to_string()
            }
        })
        .collect();

    format!("Filter by Age: {}", options.join("  "))
}

/// Name, `breed • age • gender`, the first photo if any and the profile link.
pub fn render_pet_card(pet: &Pet) -> Vec<String> {
    let mut lines = vec![
        format!("  {}", pet.name),
        format!("  {} • {} • {}", pet.primary_breed(), pet.age, pet.gender),
    ];
    if let Some(url) = pet.photo_url() {
        lines.push(format!("  Photo: {url}"));
    }
    lines.push(format!("  View Full Profile → {}", pet.url));
    lines
}

pub fn render_search_box(query: &str) -> String {
    if query.is_empty() {
        format!("Search: ({SEARCH_PLACEHOLDER})")
    } else {
        format!("Search: {query}")
    }
}

pub fn render_history_entry(pet: &Pet) -> String {
    format!("  - {} – {}", pet.name, pet.primary_breed())
}
