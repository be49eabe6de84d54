//! Generation guard for re-fetched collections.
//!
//! Views always refetch whole collections after a mutation. With two
//! fetches of the same slice in flight, whichever finishes last used to
//! win regardless of which was started last. [`Refresh`] closes that
//! hole: every fetch takes a [`Ticket`] for the current generation, and
//! a completion only lands while its ticket is still current.

/// Handle for one in-flight fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Latest-wins holder for one state slice.
#[derive(Clone, Debug)]
pub struct Refresh<T> {
    generation: u64,
    value: Option<T>,
}

impl<T> Default for Refresh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Refresh<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            value: None,
        }
    }

    /// Marks the start of a fetch against the current generation.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation)
    }

    /// Invalidates everything currently in flight (a mutation happened,
    /// or the view moved on before its fetch returned).
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Lands a fetched value. Returns `false` (value dropped) when the
    /// ticket's generation has been invalidated since `begin`.
    pub fn complete(&mut self, ticket: Ticket, value: T) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.value = Some(value);
        true
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}
