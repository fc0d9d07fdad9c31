//! tp-correlations: frictional pressure drop of gas-liquid flow in pipes.
//!
//! Provides:
//! - Eleven published two-phase correlations (Friedel, Chisholm, Theissing, ...)
//! - The shared single-phase Darcy-Weisbach drop they are built on
//! - Darcy friction factor providers behind the `FrictionModel` trait
//! - Dimensionless groups and homogeneous void fraction
//!
//! Every correlation is a pure function of the flow state and pipe geometry,
//! suitable for sweeping or comparing side by side.
//!
//! # Example
//!
//! ```
//! use tp_correlations::{Correlation, FlowState, PipeGeometry};
//! use tp_core::units::{kgpm3, kgps, m, pas};
//!
//! let state = FlowState::new(kgps(0.6), 0.1, kgpm3(915.0))
//!     .with_gas_density(kgpm3(2.67))
//!     .with_viscosities(pas(180e-6), pas(14e-6))
//!     .with_surface_tension(0.0487);
//! let pipe = PipeGeometry::new(m(0.05));
//!
//! let dp = Correlation::Friedel.evaluate(&state, &pipe).unwrap();
//! assert!((dp.value - 738.65).abs() < 1e-2);
//! ```

pub mod common;
pub mod correlation;
pub mod error;
pub mod flow;
pub mod friction;
pub mod groups;
pub mod models;
pub mod single_phase;
pub mod sweep;
pub mod voidage;

// Re-exports
pub use correlation::{Correlation, compare};
pub use error::{CorrelationError, CorrelationResult, FrictionError, FrictionResult};
pub use flow::{FlowState, Param, PhaseProps, PipeGeometry, TwoPhaseFlow};
pub use friction::{Clamond, Colebrook, FrictionModel, SwameeJain};
pub use single_phase::{ReferenceDrops, SinglePhaseDrop, single_phase_drop};
pub use sweep::{QualitySweep, SweepResult, sweep_quality};
