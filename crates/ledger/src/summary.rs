//! Ordering and aggregation over the per-friend debt summary.
//!
//! All functions are pure; callers re-run them whenever the summary list
//! is re-fetched.

use std::cmp::Ordering;

use api_types::summary::DebtSummaryEntry;

/// Display bucket: creditors first, then debtors, settled rows last.
fn bucket(entry: &DebtSummaryEntry) -> u8 {
    if entry.amount_owed == 0.0 {
        2
    } else if entry.is_debtor {
        1
    } else {
        0
    }
}

/// Sorts entries into display order, in place.
///
/// Settled rows (`amount_owed == 0`) go last; among unsettled rows the
/// ones where the session user owes come after the ones where they are
/// owed; within a bucket, larger amounts first. The sort is stable, so
/// equal rows keep their fetch order.
pub fn order(entries: &mut [DebtSummaryEntry]) {
    entries.sort_by(compare);
}

fn compare(a: &DebtSummaryEntry, b: &DebtSummaryEntry) -> Ordering {
    bucket(a)
        .cmp(&bucket(b))
        .then_with(|| b.amount_owed.total_cmp(&a.amount_owed))
}

/// Net balance across all friends: owed-to-you counts positive, what you
/// owe counts negative.
pub fn total_balance(entries: &[DebtSummaryEntry]) -> f64 {
    entries.iter().fold(0.0, |total, entry| {
        if entry.is_debtor {
            total - entry.amount_owed
        } else {
            total + entry.amount_owed
        }
    })
}

/// One-line headline for the friends screen.
pub fn overall_message(total_balance: f64) -> String {
    if total_balance == 0.0 {
        "Your balances are settled!".to_string()
    } else if total_balance < 0.0 {
        format!("Overall, you owe: {:.2}", total_balance.abs())
    } else {
        format!("Overall, you are owed: {total_balance:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(friend_id: i64, amount_owed: f64, is_debtor: bool) -> DebtSummaryEntry {
        DebtSummaryEntry {
            friend_id,
            friend_name: format!("friend-{friend_id}"),
            amount_owed,
            is_debtor,
            groups: Vec::new(),
        }
    }

    #[test]
    fn settled_rows_sort_last() {
        let mut entries = vec![
            entry(1, 0.0, false),
            entry(2, 50.0, true),
            entry(3, 30.0, false),
        ];
        order(&mut entries);

        let ids: Vec<i64> = entries.iter().map(|e| e.friend_id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn same_bucket_sorts_by_amount_descending() {
        let mut entries = vec![
            entry(1, 10.0, false),
            entry(2, 80.0, false),
            entry(3, 25.0, true),
            entry(4, 90.0, true),
        ];
        order(&mut entries);

        let ids: Vec<i64> = entries.iter().map(|e| e.friend_id).collect();
        assert_eq!(ids, vec![2, 1, 4, 3]);
    }

    #[test]
    fn equal_rows_keep_fetch_order() {
        let mut entries = vec![
            entry(7, 20.0, false),
            entry(8, 20.0, false),
            entry(9, 20.0, false),
        ];
        order(&mut entries);

        let ids: Vec<i64> = entries.iter().map(|e| e.friend_id).collect();
        assert_eq!(ids, vec![7, 8, 9]);
    }

    #[test]
    fn net_balance_offsets_debts_against_credits() {
        let entries = vec![entry(1, 100.0, false), entry(2, 40.0, true)];
        let total = total_balance(&entries);
        assert_eq!(total, 60.0);
        assert_eq!(overall_message(total), "Overall, you are owed: 60.00");
    }

    #[test]
    fn headline_covers_all_three_states() {
        assert_eq!(overall_message(0.0), "Your balances are settled!");
        assert_eq!(overall_message(-12.3456), "Overall, you owe: 12.35");
        assert_eq!(overall_message(5.0), "Overall, you are owed: 5.00");
    }

    #[test]
    fn empty_summary_is_settled() {
        assert_eq!(total_balance(&[]), 0.0);
        assert_eq!(overall_message(0.0), "Your balances are settled!");
    }
}
