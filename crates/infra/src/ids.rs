//! Meeting id generation

use aura_core::IdGenerator;
use aura_domain::MeetingId;
use uuid::Uuid;

const ID_PREFIX: &str = "m_";

/// `m_`-prefixed UUIDv7 ids. They sort by creation time and stay unique
/// across processes sharing a database.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> MeetingId {
        MeetingId::new(format!("{ID_PREFIX}{}", Uuid::now_v7().simple()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_prefixed_and_unique() {
        let ids: HashSet<MeetingId> = (0..1_000).map(|_| UuidIdGenerator.next_id()).collect();

        assert_eq!(ids.len(), 1_000);
        assert!(ids.iter().all(|id| id.as_str().starts_with("m_") && id.as_str().len() == 34));
    }
}
