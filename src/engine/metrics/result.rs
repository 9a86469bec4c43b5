use indexmap::IndexMap;
use serde::Serialize;

use crate::engine::metrics::group_key::GroupKey;
use crate::engine::metrics::ops::round_to;

/// Statistic label to value.
pub type StatMap = IndexMap<String, f64>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupStats {
    /// Rows in the group, whether or not they contributed to any measure.
    pub row_count: usize,
    pub measures: IndexMap<String, StatMap>,
}

impl GroupStats {
    pub fn stat(&self, measure: &str, label: &str) -> Option<f64> {
        self.measures.get(measure).and_then(|m| m.get(label)).copied()
    }

    fn rounded(&self, places: u32) -> Self {
        Self {
            row_count: self.row_count,
            measures: self
                .measures
                .iter()
                .map(|(name, stats)| {
                    let stats = stats
                        .iter()
                        .map(|(label, v)| (label.clone(), round_to(*v, places)))
                        .collect();
                    (name.clone(), stats)
                })
                .collect(),
        }
    }
}

/// Output of one `aggregate` call. Groups appear in first-seen row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregationResult {
    group_by: Vec<String>,
    groups: IndexMap<GroupKey, GroupStats>,
}

impl AggregationResult {
    pub(crate) fn new(group_by: Vec<String>, groups: IndexMap<GroupKey, GroupStats>) -> Self {
        Self { group_by, groups }
    }

    pub fn group_by(&self) -> &[String] {
        &self.group_by
    }

    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, &GroupStats)> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.keys()
    }

    pub fn get(&self, key: &GroupKey) -> Option<&GroupStats> {
        self.groups.get(key)
    }

    pub fn stat(&self, key: &GroupKey, measure: &str, label: &str) -> Option<f64> {
        self.groups.get(key).and_then(|g| g.stat(measure, label))
    }

    pub fn row_count(&self, key: &GroupKey) -> Option<usize> {
        self.groups.get(key).map(|g| g.row_count)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Copy with every statistic rounded to `places` decimals.
    pub fn rounded(&self, places: u32) -> Self {
        Self {
            group_by: self.group_by.clone(),
            groups: self
                .groups
                .iter()
                .map(|(k, g)| (k.clone(), g.rounded(places)))
                .collect(),
        }
    }

    pub(crate) fn into_groups(self) -> IndexMap<GroupKey, GroupStats> {
        self.groups
    }
}
