//! Journal entry feed — the thin collaborator the gamification core reads.

pub mod storage;

pub use storage::{EntryRow, EntryStore};
