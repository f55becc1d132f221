use serde::{Deserialize, Serialize};
use std::fmt;

/// One enrollee. `email` is the lookup key within a roster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub specialization: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        year: i64,
        email: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            year,
            email: email.into(),
            specialization: specialization.into(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Year: {}, Email: {}, Specialization: {}",
            self.name, self.year, self.email, self.specialization
        )
    }
}
