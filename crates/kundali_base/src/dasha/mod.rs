//! Vimshottari dasha (planetary period) engine.
//!
//! A pure function of the Moon's birth nakshatra and an age in years:
//! Mahadashas partition the 120-year cycle, and each period splits
//! proportionally into nine children down to Pranadasha (level 4).

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{balanced_mahadasha_sequence, nakshatra_birth_balance};
pub use query::{
    calculate_current_dasha, dasha_hierarchy, dasha_snapshot, find_active_period,
    mahadasha_sequence, snapshot_in, wrap_age_into_cycle,
};
pub use subperiod::{calculate_antardashas, complete_level, snap_last_child_end, sub_periods};
pub use types::{
    DAYS_PER_YEAR, DEFAULT_DASHA_LEVEL, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL, VIMSHOTTARI_TOTAL_YEARS,
};
pub use vimshottari::{
    DashaConfig, NakshatraLordScheme, VIMSHOTTARI_SEQUENCE, cycle_from,
    generate_mahadasha_sequence, moon_dasha_lord, starting_dasha_lord, vimshottari_years,
};
