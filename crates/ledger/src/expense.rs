use std::collections::BTreeMap;

use api_types::{SplitMode, SplitType, expense::ExpenseNew, group::GroupSummary};

use crate::{
    CustomSplit, LedgerError, Participant, ParticipantId, ResultLedger, split::SplitDraft,
};

/// Raw expense form state, as the user left it.
///
/// Nothing is coerced until [`ExpenseForm::assemble`] turns the form into
/// a wire payload; until then `amount` is whatever was typed.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseForm {
    pub description: String,
    pub currency: String,
    pub amount: String,
    split_type: SplitType,
    pub group: Option<GroupSummary>,
    pub participants: Vec<Participant>,
    pub payer: Option<Participant>,
    custom_split: Option<CustomSplit>,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            currency: "INR".to_string(),
            amount: String::new(),
            split_type: SplitType::default(),
            group: None,
            participants: Vec::new(),
            payer: None,
            custom_split: None,
        }
    }
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn split_type(&self) -> SplitType {
        self.split_type
    }

    /// Changes the split type.
    ///
    /// Moving away from `Custom` deliberately keeps any captured custom
    /// values; use [`ExpenseForm::clear_custom_split`] to drop them.
    pub fn set_split_type(&mut self, split_type: SplitType) {
        self.split_type = split_type;
    }

    pub fn custom_split(&self) -> Option<&CustomSplit> {
        self.custom_split.as_ref()
    }

    pub fn clear_custom_split(&mut self) {
        self.custom_split = None;
    }

    /// The amount the custom split has to reconcile against.
    pub fn expected_total(&self) -> f64 {
        self.amount.trim().parse::<f64>().unwrap_or(0.0)
    }

    /// Opens a custom split over the currently selected participants.
    ///
    /// Guarded the same way the form guards the split editor: there must
    /// already be a positive amount, a payer and at least one participant.
    pub fn begin_custom_split(&self) -> ResultLedger<SplitDraft> {
        if self.expected_total() <= 0.0 {
            return Err(LedgerError::CustomSplitNeedsAmount);
        }
        if self.payer.is_none() {
            return Err(LedgerError::CustomSplitNeedsPayer);
        }
        if self.participants.is_empty() {
            return Err(LedgerError::CustomSplitNeedsParticipants);
        }
        Ok(SplitDraft::new(SplitMode::Amount, &self.participants))
    }

    /// Captures a saved custom split and marks the expense as custom-split.
    pub fn attach_custom_split(&mut self, split: CustomSplit) {
        self.split_type = SplitType::Custom;
        self.custom_split = Some(split);
    }

    /// Builds the `POST /expenses` / `PUT /expenses/{id}` payload.
    ///
    /// Validation failures surface one at a time, before any network call.
    /// The `Me` sentinel is resolved here, uniformly across payer,
    /// participants and custom split keys; split values travel verbatim.
    pub fn assemble(&self, user_id: i64) -> ResultLedger<ExpenseNew> {
        if self.description.trim().is_empty() {
            return Err(LedgerError::MissingDescription);
        }
        let amount = self.expected_total();
        if amount <= 0.0 {
            return Err(LedgerError::InvalidAmount);
        }
        let payer = self.payer.as_ref().ok_or(LedgerError::MissingPayer)?;
        if self.participants.is_empty() {
            return Err(LedgerError::NoParticipants);
        }

        let participants: Vec<i64> = self
            .participants
            .iter()
            .map(|p| p.id.resolve(user_id))
            .collect();

        // Only splits belonging to still-selected participants go out.
        let selected: Vec<ParticipantId> = self.participants.iter().map(|p| p.id).collect();
        let (custom_splits, split_mode) = match &self.custom_split {
            Some(split) => {
                let values: BTreeMap<i64, String> = split
                    .values
                    .iter()
                    .filter(|(id, _)| selected.contains(*id))
                    .map(|(id, raw)| (id.resolve(user_id), raw.clone()))
                    .collect();
                (values, split.mode)
            }
            None => (BTreeMap::new(), SplitMode::default()),
        };

        Ok(ExpenseNew {
            user_id,
            description: self.description.clone(),
            currency: self.currency.clone(),
            amount,
            split_type: self.split_type,
            group_id: self.group.as_ref().map(|g| g.group_id),
            participants,
            payer_id: payer.id.resolve(user_id),
            custom_splits,
            split_mode,
        })
    }
}
