//! route-cli
//! =========
//!
//! Command-line front end for [`route_core`]. The binary is
//! `route-estimator`; the modules below are exposed so the prompt loop,
//! the export writer and the chart renderer can be driven from tests.
//!
//! ```text
//! route-estimator stats
//! route-estimator suggest Lodnon
//! route-estimator estimate London Paris --chart
//! route-estimator interactive
//! route-estimator export --dir ./out --force
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod chart;
pub mod export;
pub mod session;
