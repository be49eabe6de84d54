use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// How an expense is divided among its participants.
///
/// `Custom` carries a per-participant map in `custom_splits`; the other
/// variants are resolved entirely server-side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    #[default]
    Equal,
    Unequal,
    Percentage,
    Custom,
}

/// Unit of a custom split entry: fixed currency amounts, or proportional
/// integer shares the server converts into amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    #[default]
    Amount,
    Share,
}

pub mod expense {
    use super::*;

    /// Request body for `POST /expenses`.
    ///
    /// `custom_splits` values are sent verbatim as entered by the user;
    /// the server owns the numeric interpretation.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub user_id: i64,
        pub description: String,
        pub currency: String,
        pub amount: f64,
        #[serde(rename = "splitType")]
        pub split_type: SplitType,
        pub group_id: Option<i64>,
        pub participants: Vec<i64>,
        pub payer_id: i64,
        #[serde(rename = "customSplits")]
        pub custom_splits: BTreeMap<i64, String>,
        #[serde(rename = "splitMode")]
        pub split_mode: SplitMode,
    }

    /// Request body for `PUT /expenses/{id}` (same shape as a create).
    pub type ExpenseUpdate = ExpenseNew;

    /// Echo returned after a create/update.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseRecord {
        pub id: i64,
        pub description: String,
        pub currency: String,
        pub amount: f64,
        #[serde(rename = "splitType")]
        pub split_type: SplitType,
        pub group_id: Option<i64>,
        pub payer_id: i64,
        /// RFC3339 timestamp, including timezone offset.
        pub created_at: DateTime<FixedOffset>,
    }
}

pub mod friend {
    use super::*;

    /// Row of `GET /api/friends/{user_id}`, feeding the participant picker.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct FriendSummary {
        pub id: i64,
        pub name: String,
    }

    /// Request body for `POST /users/{user_id}/friends`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct FriendsAdd {
        pub friend_ids: Vec<i64>,
    }
}

pub mod group {
    use super::*;

    /// Row of `GET /api/groups/{user_id}`, feeding the group picker.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct GroupSummary {
        pub group_id: i64,
        pub group_name: String,
        #[serde(default)]
        pub members: Vec<GroupMember>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct GroupMember {
        pub id: i64,
        pub name: String,
    }
}

pub mod summary {
    use super::*;

    /// Per-friend row of `GET /expense-summary/{user_id}`.
    ///
    /// `amount_owed` is always non-negative; the direction of the debt is
    /// carried by `is_debtor` (`true` = the session user owes this friend).
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct DebtSummaryEntry {
        pub friend_id: i64,
        pub friend_name: String,
        pub amount_owed: f64,
        pub is_debtor: bool,
        #[serde(default)]
        pub groups: Vec<GroupDebt>,
    }

    /// Per-group breakdown attached to a friend summary.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct GroupDebt {
        pub group_id: i64,
        pub group_name: String,
        #[serde(default)]
        pub debt_summary: Vec<DebtEdge>,
    }

    /// A single directed debt inside a group.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct DebtEdge {
        pub debtor_id: i64,
        pub creditor_id: i64,
        pub amount: f64,
    }
}

pub mod settle {
    use super::*;

    /// Request body for `POST /settle-up`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SettleUp {
        pub user_id: i64,
        pub creditor_id: i64,
        pub debtor_id: i64,
        pub settle_up_amount: f64,
        pub group_id: Option<i64>,
    }
}

pub mod activity {
    use super::*;

    /// Row of `GET /users/{user_id}/activities`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Activity {
        pub id: i64,
        pub description: String,
        /// RFC3339 timestamp, including timezone offset.
        pub created_at: DateTime<FixedOffset>,
    }
}
