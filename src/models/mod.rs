// ============================================================================
// MODELS MODULE - Estructuras compartidas con backend
// ============================================================================

pub mod report;
pub mod stats;
pub mod user;

pub use report::*;
pub use stats::*;
pub use user::*;
