//! Application-Layer: Sitzungszustand und Bericht.

pub mod report;
pub mod session;

pub use report::{PartSummary, PathReport};
pub use session::{HoverInfo, PathSession};
