use anyhow::{Context as _, Result};
use fonward_core::domain::Contact;
use fonward_core::sms::{MULTIPART_SEGMENT_SEPTETS, SEGMENT_SEPTETS};
use std::fs;
use std::path::Path;

/// Loads a contact corpus from a JSON array of
/// `{ "name", "phone_number", "category" }` objects. Input order is kept.
pub fn load_contacts(path: &Path) -> Result<Vec<Contact>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read contacts file {}", path.display()))?;
    let contacts: Vec<Contact> = serde_json::from_str(&contents)
        .with_context(|| format!("parse contacts file {}", path.display()))?;
    Ok(contacts)
}

/// Segments needed to transport `length` septets: one segment up to 160,
/// then 153 septets per part once concatenation headers eat into each one.
pub fn segment_count(length: usize) -> usize {
    if length <= SEGMENT_SEPTETS {
        1
    } else {
        length.div_ceil(MULTIPART_SEGMENT_SEPTETS)
    }
}
