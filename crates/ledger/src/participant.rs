/// Identity of someone taking part in an expense.
///
/// The session user is a distinct variant rather than a magic id, so the
/// substitution with their real backend id happens exactly once, at the
/// assembler boundary. No emitted payload ever carries `Me`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParticipantId {
    Me,
    Other(i64),
}

impl ParticipantId {
    /// Replaces `Me` with the session user's backend id.
    #[must_use]
    pub fn resolve(self, user_id: i64) -> i64 {
        match self {
            Self::Me => user_id,
            Self::Other(id) => id,
        }
    }
}

/// A selectable participant as shown in the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn me(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::Me,
            name: name.into(),
        }
    }

    pub fn other(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::Other(id),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_rewrites_me_only() {
        assert_eq!(ParticipantId::Me.resolve(42), 42);
        assert_eq!(ParticipantId::Other(7).resolve(42), 7);
    }
}
