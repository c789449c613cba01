//! # Pathwise Core (Foundation Layer)
//!
//! Foundation crate for the pathwise Monte Carlo pricing engine.
//!
//! This crate has no dependency on the other workspace members and provides:
//! - [`types::TimeGrid`]: the shared simulation discretisation
//! - [`market_data::curves`]: discount-curve abstractions (flat curve)
//! - [`math::distributions`]: standard normal CDF/PDF
//! - [`math::stats`]: sample statistics used by the bootstrap estimator
//!
//! # Example
//!
//! ```
//! use pathwise_core::market_data::curves::{DiscountCurve, FlatCurve};
//! use pathwise_core::types::TimeGrid;
//!
//! let grid = TimeGrid::new(1.0, 0.25).unwrap();
//! assert_eq!(grid.n_periods(), 4);
//!
//! let curve = FlatCurve::new(0.05_f64);
//! assert!(curve.discount_factor(0.0).unwrap() == 1.0);
//! ```

pub mod market_data;
pub mod math;
pub mod types;
