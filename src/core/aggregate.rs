//! Grouping reports over the talk table.
//!
//! - [`monthly_volume`] - message counts per user per calendar month
//! - [`type_ratio`] - message counts per [`MessageType`]
//!
//! Both take the table they summarise as an explicit argument.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::core::table::TalkTable;
use crate::message::MessageType;

/// Messages sent by one user, aligned with [`MonthlyVolume::months`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSeries {
    pub user: String,
    pub counts: Vec<usize>,
}

/// Per-user monthly message counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyVolume {
    months: Vec<(i32, u32)>,
    series: Vec<UserSeries>,
}

impl MonthlyVolume {
    /// `(year, month)` pairs in calendar order.
    pub fn months(&self) -> &[(i32, u32)] {
        &self.months
    }

    /// Axis labels, `"2023/1"` style (no zero padding).
    pub fn labels(&self) -> Vec<String> {
        self.months
            .iter()
            .map(|(year, month)| format!("{}/{}", year, month))
            .collect()
    }

    /// One series per user, users in order of first appearance.
    pub fn series(&self) -> &[UserSeries] {
        &self.series
    }

    /// Messages `user` sent in the given month.
    pub fn count(&self, user: &str, year: i32, month: u32) -> usize {
        let Some(idx) = self.months.iter().position(|&m| m == (year, month)) else {
            return 0;
        };
        self.series
            .iter()
            .find(|s| s.user == user)
            .map(|s| s.counts[idx])
            .unwrap_or(0)
    }

    /// Messages counted across all users and months.
    pub fn total(&self) -> usize {
        self.series.iter().flat_map(|s| s.counts.iter()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Counts records per `(year, month, user)`.
///
/// Records without a date are left out.
pub fn monthly_volume(table: &TalkTable) -> MonthlyVolume {
    let mut users: Vec<&str> = Vec::new();
    let mut months: BTreeSet<(i32, u32)> = BTreeSet::new();
    let mut counts: HashMap<(usize, (i32, u32)), usize> = HashMap::new();

    for record in table {
        let (Some(year), Some(month)) = (record.year(), record.month()) else {
            continue;
        };

        let user_idx = match users.iter().position(|u| *u == record.user()) {
            Some(idx) => idx,
            None => {
                users.push(record.user());
                users.len() - 1
            }
        };

        months.insert((year, month));
        *counts.entry((user_idx, (year, month))).or_insert(0) += 1;
    }

    let months: Vec<(i32, u32)> = months.into_iter().collect();
    let series = users
        .iter()
        .enumerate()
        .map(|(user_idx, user)| UserSeries {
            user: (*user).to_string(),
            counts: months
                .iter()
                .map(|m| counts.get(&(user_idx, *m)).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    MonthlyVolume { months, series }
}

/// Counts records per message type.
///
/// Ordered by descending count; ties keep the order in which the types first
/// appear. Types that never occur are omitted.
pub fn type_ratio(table: &TalkTable) -> Vec<(MessageType, usize)> {
    let mut ratio: Vec<(MessageType, usize)> = Vec::new();

    for record in table {
        match ratio.iter_mut().find(|(kind, _)| *kind == record.kind()) {
            Some((_, count)) => *count += 1,
            None => ratio.push((record.kind(), 1)),
        }
    }

    ratio.sort_by(|a, b| b.1.cmp(&a.1));
    ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageRecord;
    use chrono::NaiveDate;

    fn record(ymd: Option<(i32, u32, u32)>, user: &str, kind: MessageType) -> MessageRecord {
        let date = ymd.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        MessageRecord::new(date, "09:00", user, "x", kind)
    }

    fn sample() -> TalkTable {
        TalkTable::new(vec![
            record(Some((2023, 2, 1)), "Bob", MessageType::Message),
            record(Some((2023, 1, 5)), "Alice", MessageType::Stamp),
            record(Some((2023, 1, 6)), "Alice", MessageType::Message),
            record(Some((2022, 12, 31)), "Bob", MessageType::Picture),
            record(None, "Carol", MessageType::Message),
        ])
    }

    #[test]
    fn test_monthly_volume_calendar_order() {
        let volume = monthly_volume(&sample());
        assert_eq!(volume.months(), &[(2022, 12), (2023, 1), (2023, 2)]);
        assert_eq!(volume.labels(), vec!["2022/12", "2023/1", "2023/2"]);
    }

    #[test]
    fn test_monthly_volume_counts() {
        let volume = monthly_volume(&sample());
        let users: Vec<&str> = volume.series().iter().map(|s| s.user.as_str()).collect();
        assert_eq!(users, vec!["Bob", "Alice"]);

        assert_eq!(volume.series()[0].counts, vec![1, 0, 1]);
        assert_eq!(volume.series()[1].counts, vec![0, 2, 0]);
        assert_eq!(volume.count("Alice", 2023, 1), 2);
        assert_eq!(volume.count("Alice", 2021, 1), 0);
        assert_eq!(volume.count("Nobody", 2023, 1), 0);
    }

    #[test]
    fn test_monthly_volume_skips_undated() {
        let volume = monthly_volume(&sample());
        assert_eq!(volume.total(), 4);
        assert!(volume.series().iter().all(|s| s.user != "Carol"));
    }

    #[test]
    fn test_monthly_volume_empty() {
        let volume = monthly_volume(&TalkTable::default());
        assert!(volume.is_empty());
        assert_eq!(volume.total(), 0);
    }

    #[test]
    fn test_type_ratio_order() {
        let ratio = type_ratio(&sample());
        assert_eq!(
            ratio,
            vec![
                (MessageType::Message, 3),
                (MessageType::Stamp, 1),
                (MessageType::Picture, 1),
            ]
        );
    }

    #[test]
    fn test_type_ratio_counts_every_record() {
        let table = sample();
        let total: usize = type_ratio(&table).iter().map(|(_, c)| c).sum();
        assert_eq!(total, table.len());
    }
}
