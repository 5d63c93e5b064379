use crate::domain::Contact;
use crate::normalize::fold_for_match;

/// Retains every contact whose name or phone number contains `query`,
/// compared case- and diacritic-insensitively via
/// [`fold_for_match`](crate::normalize::fold_for_match).
///
/// An empty query returns the whole corpus; surviving contacts keep their
/// input order. The function is pure and allocates nothing beyond the
/// result vector (and the folded comparison forms), so callers may invoke
/// it on every keystroke.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    if query.is_empty() {
        return contacts.iter().collect();
    }

    let needle = fold_for_match(query);
    contacts
        .iter()
        .filter(|contact| {
            fold_for_match(&contact.name).contains(&needle)
                || fold_for_match(&contact.phone_number).contains(&needle)
        })
        .collect()
}
