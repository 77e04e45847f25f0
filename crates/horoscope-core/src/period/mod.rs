//! Period aggregation: summaries, critical-day lists and calendar grids.
//!
//! Every operation is O(days × cycles) and evaluates each date
//! independently; sums and comparisons use unrounded values and round once
//! when the result is assembled.

mod aggregator;
mod calendar;

pub use aggregator::{CriticalDayInfo, PeriodAggregator, PeriodSummary, Severity};
pub use calendar::{lunar_month_calendar, LunarCalendarDay};
