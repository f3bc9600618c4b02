// mod.rs - Substitution tables module root

pub mod blosum62;
pub mod grantham;
pub mod registry;
pub mod traits;

// Re-export main types for convenience
pub use blosum62::Blosum62Table;
pub use grantham::GranthamTable;
pub use registry::TableRegistry;
pub use traits::{SubstitutionTable, UNSCORED};
