//! Opaque receipt id generation.

use uuid::Uuid;

/// Produces fresh, unique ids for accepted receipts.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Hyphenated UUID v4 ids, e.g. `7fb1377b-b223-49d9-a31a-5a02701dd310`.
///
/// Globally unique without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| UuidGenerator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_uuid_id_format() {
        let id = UuidGenerator.next_id();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
