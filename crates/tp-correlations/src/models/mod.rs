//! Individual two-phase frictional pressure drop correlations.
//!
//! Each function is pure: validated inputs in, a pressure drop out.

pub mod chisholm;
pub mod friedel;
pub mod gronnerud;
pub mod jung_radermacher;
pub mod lombardi_pedrocchi;
pub mod muller_steinhagen_heck;
pub mod theissing;
pub mod tran;
pub mod zhang_webb;

pub use chisholm::{baroczy_chisholm, chisholm};
pub use friedel::{
    CHEN_FRIEDEL_BOND_COEFFICIENT, CHEN_FRIEDEL_BOND_COEFFICIENT_PUBLISHED, chen_friedel,
    chen_friedel_with_coefficient, friedel,
};
pub use gronnerud::gronnerud;
pub use jung_radermacher::jung_radermacher;
pub use lombardi_pedrocchi::lombardi_pedrocchi;
pub use muller_steinhagen_heck::muller_steinhagen_heck;
pub use theissing::theissing;
pub use tran::tran;
pub use zhang_webb::zhang_webb;
