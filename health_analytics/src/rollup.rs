//! Insertion-ordered period rollups.
//!
//! Every aggregation in this crate sums `f64` amounts under a bucket key.
//! The map is an [`IndexMap`], so iteration follows first-insertion order and
//! the extremal scans below break ties deterministically in favor of the
//! first-inserted key.

use std::hash::Hash;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::bucket::{self, MonthKey, WeekKey, YearKey};

/// Sum of amounts per bucket key, in first-insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rollup<K: Hash + Eq> {
    totals: IndexMap<K, f64>,
}

impl<K: Hash + Eq> Default for Rollup<K> {
    fn default() -> Self {
        Self {
            totals: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> Rollup<K> {
    pub fn add(&mut self, key: K, amount: f64) {
        *self.totals.entry(key).or_default() += amount;
    }

    /// Total for a key; an absent key observed no change and reads as 0.
    pub fn get(&self, key: &K) -> f64 {
        self.totals.get(key).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.totals.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.totals.iter().map(|(k, v)| (k, *v))
    }

    /// Entry with the maximum total; ties keep the first-inserted key.
    pub fn max_entry(&self) -> Option<(&K, f64)> {
        let mut best: Option<(&K, f64)> = None;
        for (key, total) in self.iter() {
            match best {
                Some((_, current)) if total <= current => {}
                _ => best = Some((key, total)),
            }
        }
        best
    }

    /// Entry with the minimum total; ties keep the first-inserted key.
    pub fn min_entry(&self) -> Option<(&K, f64)> {
        let mut best: Option<(&K, f64)> = None;
        for (key, total) in self.iter() {
            match best {
                Some((_, current)) if total >= current => {}
                _ => best = Some((key, total)),
            }
        }
        best
    }
}

/// The weekly/monthly/yearly rollups of one measure, fed date by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodTotals {
    pub weekly: Rollup<WeekKey>,
    pub monthly: Rollup<MonthKey>,
    pub yearly: Rollup<YearKey>,
}

impl PeriodTotals {
    /// Add an amount under all three bucket keys of `date`.
    pub fn add(&mut self, date: NaiveDate, amount: f64) {
        let (year, month, week) = bucket::bucket(date);
        self.weekly.add(week, amount);
        self.monthly.add(month, amount);
        self.yearly.add(year, amount);
    }

    pub fn for_year(&self, year: i32) -> f64 {
        self.yearly.get(&YearKey(year))
    }

    pub fn for_month(&self, year: i32, month: u32) -> f64 {
        self.monthly.get(&MonthKey { year, month })
    }

    pub fn for_week(&self, year: i32, month: u32, week: u32) -> f64 {
        self.weekly.get(&WeekKey { year, month, week })
    }

    pub fn is_empty(&self) -> bool {
        self.weekly.is_empty() && self.monthly.is_empty() && self.yearly.is_empty()
    }
}
