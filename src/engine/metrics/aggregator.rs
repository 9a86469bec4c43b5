use indexmap::IndexMap;
use tracing::debug;

use crate::engine::core::table::UnifiedTable;
use crate::engine::errors::Result;
use crate::engine::metrics::group_key::GroupKey;
use crate::engine::metrics::ops::Accumulator;
use crate::engine::metrics::plan::AggregatePlan;
use crate::engine::metrics::result::{AggregationResult, GroupStats, StatMap};

struct GroupState {
    row_count: usize,
    accumulators: Vec<Accumulator>,
}

/// Groups the table's rows and computes the plan's statistics per group.
///
/// Rows missing a measure value are left out of that measure only; a statistic
/// with no contributing values is omitted. The table is never modified.
pub fn aggregate(table: &UnifiedTable, plan: &AggregatePlan) -> Result<AggregationResult> {
    plan.validate(table)?;

    let measure_fields: Vec<&String> = plan.measures.keys().collect();
    let mut groups: IndexMap<GroupKey, GroupState> = IndexMap::new();
    let mut ungrouped = 0usize;

    for row in table.rows() {
        let Some(key) = GroupKey::from_row(&row.fields, &plan.group_by) else {
            ungrouped += 1;
            continue;
        };
        let state = groups.entry(key).or_insert_with(|| GroupState {
            row_count: 0,
            accumulators: vec![Accumulator::new(); measure_fields.len()],
        });
        state.row_count += 1;
        for (acc, field) in state.accumulators.iter_mut().zip(&measure_fields) {
            if let Some(v) = row.fields.get_f64(field) {
                acc.push(v);
            }
        }
    }

    if ungrouped > 0 {
        debug!(
            rows = ungrouped,
            group_by = ?plan.group_by,
            "Rows with null grouping values skipped"
        );
    }

    let groups = groups
        .into_iter()
        .map(|(key, state)| (key, finalize(plan, state)))
        .collect();
    Ok(AggregationResult::new(plan.group_by.clone(), groups))
}

fn finalize(plan: &AggregatePlan, state: GroupState) -> GroupStats {
    let mut measures = IndexMap::with_capacity(plan.measures.len());
    for ((field, stats), acc) in plan.measures.iter().zip(&state.accumulators) {
        let values: StatMap = stats
            .iter()
            .filter_map(|stat| acc.finalize(stat).map(|v| (stat.label(), v)))
            .collect();
        if !values.is_empty() {
            measures.insert(field.clone(), values);
        }
    }
    GroupStats {
        row_count: state.row_count,
        measures,
    }
}
