// src/shared/state/record_key.rs
use std::fmt;

use uuid::Uuid;

/// Key used to render and reconcile a record held in a local list.
///
/// Records coming back from the API normally carry their numeric id. A create
/// response that omits it still has to be shown, so it gets a client-side
/// placeholder until the next refetch replaces the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Persisted(i64),
    Temporary(Uuid),
}

impl RecordKey {
    pub fn temporary() -> Self {
        RecordKey::Temporary(Uuid::new_v4())
    }

    pub fn for_id(id: Option<i64>) -> Self {
        match id {
            Some(id) => RecordKey::Persisted(id),
            None => RecordKey::temporary(),
        }
    }

    pub fn persisted_id(&self) -> Option<i64> {
        match self {
            RecordKey::Persisted(id) => Some(*id),
            RecordKey::Temporary(_) => None,
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, RecordKey::Temporary(_))
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Persisted(id) => write!(f, "{}", id),
            RecordKey::Temporary(uuid) => write!(f, "tmp-{}", uuid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_id_uses_server_id_when_present() {
        assert_eq!(RecordKey::for_id(Some(7)), RecordKey::Persisted(7));
        assert_eq!(RecordKey::for_id(Some(7)).persisted_id(), Some(7));
    }

    #[test]
    fn test_for_id_without_id_is_temporary_and_unique() {
        let a = RecordKey::for_id(None);
        let b = RecordKey::for_id(None);

        assert!(a.is_temporary());
        assert!(b.is_temporary());
        assert_ne!(a, b);
        assert_eq!(a.persisted_id(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordKey::Persisted(42).to_string(), "42");
        assert!(RecordKey::temporary().to_string().starts_with("tmp-"));
    }
}
