//! Proportional sub-period generation.
//!
//! A child's duration is `parent.period * child_years / 120`; children
//! run in Vimshottari order starting from the parent's own lord.

use super::types::{DashaPeriod, VIMSHOTTARI_TOTAL_YEARS};
use super::vimshottari::cycle_from;

/// Snap the last child's end to the parent's end to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_age: f64) {
    if let Some(last) = children.last_mut() {
        last.end_age = parent_end_age;
        last.period = last.end_age - last.start_age;
    }
}

/// The nine children of `parent`, one level deeper.
///
/// Returns an empty list for a Pranadasha, which has no deeper level.
pub fn sub_periods(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start_age;
    for (i, (lord, years)) in cycle_from(parent.lord).into_iter().enumerate() {
        let period = parent.period * years / VIMSHOTTARI_TOTAL_YEARS;
        let end = cursor + period;
        children.push(DashaPeriod {
            lord,
            level: child_level,
            start_age: cursor,
            end_age: end,
            period,
            order: (i as u16) + 1,
        });
        cursor = end;
    }
    snap_last_child_end(&mut children, parent.end_age);
    children
}

/// Antardashas of a Mahadasha.
///
/// Given a deeper period, yields that period's children instead.
pub fn calculate_antardashas(mahadasha: &DashaPeriod) -> Vec<DashaPeriod> {
    sub_periods(mahadasha)
}

/// All children of every period in `parents`, in order.
pub fn complete_level(parents: &[DashaPeriod]) -> Vec<DashaPeriod> {
    parents.iter().flat_map(sub_periods).collect()
}
