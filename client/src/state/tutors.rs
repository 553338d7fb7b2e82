//! Tutor listing helpers shared by the browse and "My Tutors" pages.

#[cfg(test)]
#[path = "tutors_test.rs"]
mod tutors_test;

use crate::net::types::Tutor;

/// Languages a listing can be created for.
pub const LANGUAGES: [&str; 12] = [
    "English", "Spanish", "French", "German", "Chinese", "Arabic", "Japanese", "Hindi", "Bengali", "Korean",
    "Italian", "Russian",
];

/// Table cell length for descriptions on the browse page.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 60;

/// Filter listings for the browse page.
///
/// A route language (`/find-tutors/:language`) matches exactly, ignoring
/// case, and overrides the search box. Otherwise the search text is a
/// case-insensitive substring match on the language.
pub fn filter_tutors(tutors: &[Tutor], route_language: Option<&str>, search: &str) -> Vec<Tutor> {
    let route_language = route_language.map(str::trim).filter(|lang| !lang.is_empty());
    let needle = search.trim().to_lowercase();
    tutors
        .iter()
        .filter(|tutor| match route_language {
            Some(lang) => tutor.language.eq_ignore_ascii_case(lang),
            None => tutor.language.to_lowercase().contains(&needle),
        })
        .cloned()
        .collect()
}

/// Shorten `text` to `max_chars` characters, appending `...` when cut.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Drop a deleted listing. Returns `true` if it was present.
pub fn remove_tutor(tutors: &mut Vec<Tutor>, id: &str) -> bool {
    let before = tutors.len();
    tutors.retain(|tutor| tutor.id != id);
    tutors.len() != before
}

/// Heading for the browse page.
pub fn browse_heading(route_language: Option<&str>) -> String {
    match route_language {
        Some(lang) if !lang.trim().is_empty() => format!("Tutors for {lang}"),
        _ => "Find Your Language Tutor".to_owned(),
    }
}
