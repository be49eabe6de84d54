use std::collections::BTreeMap;

use api_types::SplitMode;

use crate::{LedgerError, Participant, ParticipantId, ResultLedger};

/// In-progress custom split: one raw text input per selected participant.
///
/// Inputs stay exactly as typed. Parsing happens only when summing, where
/// anything non-numeric counts as 0, so validity can be recomputed after
/// every keystroke without touching the stored values.
///
/// # Examples
///
/// ```rust
/// use api_types::SplitMode;
/// use ledger::{Participant, SplitDraft};
///
/// let people = vec![Participant::me("You"), Participant::other(3, "Ana")];
/// let mut draft = SplitDraft::new(SplitMode::Amount, &people);
/// draft.set(people[0].id, "60");
/// draft.set(people[1].id, "40.005");
/// assert!(draft.is_valid(100.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SplitDraft {
    mode: SplitMode,
    values: BTreeMap<ParticipantId, String>,
}

/// Validated output of a [`SplitDraft`], emitted unchanged.
///
/// Shares are NOT converted into amounts here; that conversion belongs to
/// the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomSplit {
    pub values: BTreeMap<ParticipantId, String>,
    pub mode: SplitMode,
}

/// Reconciliation tolerance for amount-mode splits.
const AMOUNT_TOLERANCE: f64 = 0.01;

impl SplitDraft {
    /// Starts a draft with an empty input per participant.
    pub fn new(mode: SplitMode, participants: &[Participant]) -> Self {
        let values = participants
            .iter()
            .map(|p| (p.id, String::new()))
            .collect();
        Self { mode, values }
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    /// Switches between amount and share mode. Entered values survive the
    /// switch; only their interpretation changes.
    pub fn set_mode(&mut self, mode: SplitMode) {
        self.mode = mode;
    }

    /// Records a keystroke for one participant's input.
    pub fn set(&mut self, participant: ParticipantId, raw: impl Into<String>) {
        self.values.insert(participant, raw.into());
    }

    pub fn value(&self, participant: ParticipantId) -> Option<&str> {
        self.values.get(&participant).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drops inputs belonging to participants no longer selected, so stale
    /// entries from removed participants are never submitted.
    pub fn prune(&mut self, selected: &[ParticipantId]) {
        self.values.retain(|id, _| selected.contains(id));
    }

    /// Mode-dependent sum of the entered values.
    ///
    /// Amount mode parses decimals, share mode parses integers; empty or
    /// unparsable inputs contribute 0 in both.
    pub fn total(&self) -> f64 {
        match self.mode {
            SplitMode::Amount => self
                .values
                .values()
                .map(|raw| raw.trim().parse::<f64>().unwrap_or(0.0))
                .sum(),
            SplitMode::Share => self
                .values
                .values()
                .map(|raw| raw.trim().parse::<i64>().unwrap_or(0))
                .sum::<i64>() as f64,
        }
    }

    /// Live validity, recomputed on every keystroke.
    ///
    /// Amount mode: the sum must match the expected total within 0.01.
    /// Share mode: the sum must be strictly positive.
    pub fn is_valid(&self, expected_total: f64) -> bool {
        match self.mode {
            SplitMode::Amount => (self.total() - expected_total).abs() <= AMOUNT_TOLERANCE,
            SplitMode::Share => self.total() > 0.0,
        }
    }

    /// Validates and emits the split, values verbatim.
    ///
    /// An empty participant set cannot be saved at all.
    pub fn finish(self, expected_total: f64) -> ResultLedger<CustomSplit> {
        if self.values.is_empty() {
            return Err(LedgerError::EmptySplit);
        }
        match self.mode {
            SplitMode::Amount => {
                if (self.total() - expected_total).abs() > AMOUNT_TOLERANCE {
                    return Err(LedgerError::SplitMismatch(expected_total));
                }
            }
            SplitMode::Share => {
                if self.total() <= 0.0 {
                    return Err(LedgerError::ZeroShares);
                }
            }
        }
        Ok(CustomSplit {
            values: self.values,
            mode: self.mode,
        })
    }
}
