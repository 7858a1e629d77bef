//! Club officer roster entry.

use serde::{Deserialize, Serialize};

/// Officer roster entry. `role` is fixed by configuration, `name` is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    pub role: String,
    pub name: String,
}

impl Officer {
    pub fn new(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            name: name.into(),
        }
    }
}
