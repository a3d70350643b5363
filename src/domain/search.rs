use crate::prelude::Contact;

/// Case-sensitive substring match over name, phone, email and address.
/// An empty query matches every contact.
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    contact.searchable_fields().any(|field| field.contains(query))
}

pub fn filter_contacts<'a, I>(contacts: I, query: &str) -> Vec<&'a Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    contacts
        .into_iter()
        .filter(|contact| matches_query(contact, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: Option<&str>, address: Option<&str>) -> Contact {
        Contact::new(
            name.to_string(),
            "5551234567".to_string(),
            email.map(str::to_string),
            address.map(str::to_string),
        )
    }

    #[test]
    fn matches_any_field() {
        let alice = contact("Alice", Some("alice@example.com"), Some("1 Main St"));

        assert!(matches_query(&alice, "Ali"));
        assert!(matches_query(&alice, "555123"));
        assert!(matches_query(&alice, "example.com"));
        assert!(matches_query(&alice, "Main"));
        assert!(!matches_query(&alice, "Bob"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let alice = contact("Alice", None, Some("1 Main St"));

        assert!(!matches_query(&alice, "alice"));
        assert!(!matches_query(&alice, "main"));
    }

    #[test]
    fn missing_fields_never_match() {
        let bob = contact("Bob", None, None);

        assert!(!matches_query(&bob, "@"));
        assert!(matches_query(&bob, ""));
    }

    #[test]
    fn filter_keeps_input_order() {
        let contacts = vec![
            contact("Charlie", None, Some("Elm Street")),
            contact("Alice", None, Some("Main Street")),
            contact("Bob", None, None),
        ];

        let found: Vec<&str> = filter_contacts(&contacts, "Street")
            .iter()
            .map(|c| c.name.as_str())
            .collect();

        assert_eq!(found, vec!["Charlie", "Alice"]);
    }
}
