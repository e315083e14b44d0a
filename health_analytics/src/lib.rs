//! Analytics over parsed battery reports.
//!
//! Consumes the record sets produced by `report_ingestor` and derives:
//! per-day degradation with weekly/monthly/yearly rollups and extremes
//! ([`degradation`]), usage rollups ([`usage`]), the weekly
//! degradation/usage Pearson correlation ([`correlation`]), a linear-trend
//! end-of-life projection ([`projection`]), and above-median degradation
//! insights. [`analysis::ReportAnalysis`] bundles all of it for display
//! layers. All computations are synchronous and side-effect-free.

pub mod analysis;
pub mod bucket;
pub mod config;
pub mod correlation;
pub mod degradation;
pub mod projection;
pub mod rollup;
pub mod usage;
