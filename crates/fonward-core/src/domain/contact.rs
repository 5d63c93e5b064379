use serde::{Deserialize, Serialize};

/// A contact as delivered by the platform contacts provider. Ordering of a
/// contact collection is whatever the provider produced; nothing in this
/// crate re-sorts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone_number: String,
    pub category: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            category: category.into(),
        }
    }
}
