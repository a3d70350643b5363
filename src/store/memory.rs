use super::*;

/// Contacts in insertion order. Names are unique, enforced by `ContactStore`.
#[derive(Debug, Default)]
pub struct MemStore {
    data: Vec<Contact>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.data.iter().position(|c| c.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.data.iter().find(|c| c.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.data.iter_mut().find(|c| c.name == name)
    }

    pub fn push(&mut self, contact: Contact) {
        self.data.push(contact);
    }

    /// Shifts later contacts down so insertion order survives the removal.
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        let index = self.position(name)?;
        Some(self.data.remove(index))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> MemStoreIter<'_> {
        MemStoreIter {
            inner: &self.data,
            idx: 0,
        }
    }
}

pub struct MemStoreIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for MemStoreIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        let contact = self.inner.get(self.idx)?;
        self.idx += 1;
        Some(contact)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.len().saturating_sub(self.idx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MemStoreIter<'_> {}

impl<'a> IntoIterator for &'a MemStore {
    type Item = &'a Contact;
    type IntoIter = MemStoreIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Contact {
        Contact::new(name.to_string(), "1234567890".to_string(), None, None)
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut mem = MemStore::new();
        mem.push(named("Charlie"));
        mem.push(named("Alice"));
        mem.push(named("Bob"));

        let names: Vec<&str> = mem.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
        assert_eq!(mem.iter().len(), 3);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut mem = MemStore::new();
        mem.push(named("Charlie"));
        mem.push(named("Alice"));
        mem.push(named("Bob"));

        let removed = mem.remove("Alice");

        assert_eq!(removed.map(|c| c.name), Some("Alice".to_string()));
        assert_eq!(mem.position("Bob"), Some(1));
        assert!(mem.remove("Alice").is_none());
        assert_eq!(mem.len(), 2);
    }
}
