use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type GuestId = String;

/// A registered guest. Name and phone are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub phone: String,
    pub registered_at: DateTime<Utc>,
}

impl Guest {
    pub fn new(
        id: GuestId,
        name: impl Into<String>,
        phone: impl Into<String>,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            registered_at,
        }
    }
}
