//! Client-side ledger logic for splitting shared expenses.
//!
//! Everything here is pure: split validation, expense payload assembly,
//! debt-summary ordering and the session store hold no I/O. The HTTP
//! boundary lives in the `client` crate.

pub use error::LedgerError;
pub use expense::ExpenseForm;
pub use participant::{Participant, ParticipantId};
pub use split::{CustomSplit, SplitDraft};
pub use store::{Action, AppState, Context, SessionUser, Store, Tag};
pub use summary::{order, overall_message, total_balance};

mod error;
mod expense;
mod participant;
mod split;
mod store;
mod summary;

type ResultLedger<T> = Result<T, LedgerError>;
