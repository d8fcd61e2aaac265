//! Damage modifier arithmetic shared by the combat stages.
pub mod bonus;

pub use bonus::{Bonus, BonusStack};
