use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// Exactly ten ASCII digits. `\d` would also accept other Unicode digits.
const PHONE_PATTERN: &str = r"^[0-9]{10}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Fields to overwrite on an existing contact. `None` and empty strings leave
/// the current value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Contact {
    pub fn new(name: String, phone: String, email: Option<String>, address: Option<String>) -> Self {
        Contact {
            name,
            phone,
            email: non_empty(email),
            address: non_empty(address),
        }
    }

    /// Every text field that a query is matched against.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.as_str()),
            Some(self.phone.as_str()),
            self.email.as_deref(),
            self.address.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Overwrites the supplied fields. The phone number is expected to be
    /// validated by the caller.
    pub fn apply(&mut self, update: ContactUpdate) {
        let update = update.normalized();

        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
    }
}

impl ContactUpdate {
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Drops empty strings so they read as "no change".
    pub fn normalized(self) -> Self {
        ContactUpdate {
            phone: non_empty(self.phone),
            email: non_empty(self.email),
            address: non_empty(self.address),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none() && self.address.is_none()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\n\
            Phone Number: {}\n\
            Email: {}\n\
            Address: {}",
            self.name,
            self.phone,
            self.email.as_deref().unwrap_or_default(),
            self.address.as_deref().unwrap_or_default()
        )
    }
}

pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
