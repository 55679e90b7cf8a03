//! Time-block bucketing for task assignments.
//!
//! Maps an hour of day to one of four fixed blocks and partitions task
//! lists accordingly. The night block wraps past midnight.

use serde::{Deserialize, Serialize};

/// One of the four fixed blocks of the temple day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeBlock {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeBlock {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBlock::Morning => "morning",
            TimeBlock::Afternoon => "afternoon",
            TimeBlock::Evening => "evening",
            TimeBlock::Night => "night",
        }
    }

    /// Block boundaries: [6,12) morning, [12,18) afternoon, [18,22)
    /// evening; night covers [22,24) and [0,6). Hours >= 24 wrap.
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            6..=11 => TimeBlock::Morning,
            12..=17 => TimeBlock::Afternoon,
            18..=21 => TimeBlock::Evening,
            _ => TimeBlock::Night,
        }
    }
}

/// The four buckets of a partition, always all present (empty allowed).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeBlockBuckets<T> {
    pub morning: Vec<T>,
    pub afternoon: Vec<T>,
    pub evening: Vec<T>,
    pub night: Vec<T>,
}

impl<T> Default for TimeBlockBuckets<T> {
    fn default() -> Self {
        Self {
            morning: Vec::new(),
            afternoon: Vec::new(),
            evening: Vec::new(),
            night: Vec::new(),
        }
    }
}

impl<T> TimeBlockBuckets<T> {
    /// Flatten in declared bucket order: morning, afternoon, evening, night.
    pub fn into_vec(self) -> Vec<T> {
        let mut items = self.morning;
        items.extend(self.afternoon);
        items.extend(self.evening);
        items.extend(self.night);
        items
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len() + self.evening.len() + self.night.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `items` into the four time blocks, preserving input order
/// within each bucket. `hour_of` extracts the scheduled hour of day.
pub fn group_by_time_block<T, F>(items: Vec<T>, hour_of: F) -> TimeBlockBuckets<T>
where
    F: Fn(&T) -> u32,
{
    let mut buckets = TimeBlockBuckets::default();
    for item in items {
        match TimeBlock::from_hour(hour_of(&item)) {
            TimeBlock::Morning => buckets.morning.push(item),
            TimeBlock::Afternoon => buckets.afternoon.push(item),
            TimeBlock::Evening => buckets.evening.push(item),
            TimeBlock::Night => buckets.night.push(item),
        }
    }
    buckets
}
