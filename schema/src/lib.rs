// Pokemann Schema - Shared type definitions
// The closed category set, its effectiveness table, and the serde records
// that game data files are written in.

pub use kinds::*;
pub use records::*;

pub mod kinds;
pub mod records;
