use skate_contest_entities::prelude::*;

/// Riders whose first name, last name or address contains `term`,
/// ignoring case, sorted by last and then first name.
pub fn search_participants<'a>(state: &'a ContestState, term: &str) -> Vec<&'a Participant> {
    let term = term.to_lowercase();
    let mut found = state.participants.iter()
        .filter(|p| {
            p.first_name.to_lowercase().contains(&term)
                || p.last_name.to_lowercase().contains(&term)
                || p.address.formatted().to_lowercase().contains(&term)
        })
        .collect::<Vec<_>>();

    found.sort_by_cached_key(|p| (p.last_name.to_lowercase(), p.first_name.to_lowercase()));
    found
}

/// Display names of everyone who has paid for at least one category.
pub fn announcements(state: &ContestState) -> Vec<String> {
    state.participants.iter()
        .filter(|p| !p.paid_categories.is_empty())
        .map(|p| p.display_name())
        .collect()
}
