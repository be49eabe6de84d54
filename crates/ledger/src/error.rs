//! Validation errors raised before anything reaches the network.
//!
//! Each variant's message is the text shown to the user, so the wording
//! is part of the contract.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Description is required")]
    MissingDescription,
    #[error("Amount must be greater than 0")]
    InvalidAmount,
    #[error("Please select who paid.")]
    MissingPayer,
    #[error("Please select at least one participant.")]
    NoParticipants,
    #[error("Total amount must equal {0:.2}")]
    SplitMismatch(f64),
    #[error("Total shares cannot be zero")]
    ZeroShares,
    #[error("No participants available")]
    EmptySplit,
    #[error("The total amount must be greater than 0 to create a custom split.")]
    CustomSplitNeedsAmount,
    #[error("Please select who paid to create a custom split.")]
    CustomSplitNeedsPayer,
    #[error("Please select at least one participant for a custom split.")]
    CustomSplitNeedsParticipants,
}
