/// Concentric ring splitting
pub mod concentric;
/// Level-by-level partition driver
pub mod executor;
/// Parameter set, validation and per-level split context
pub mod parameters;
/// Injectable random sources
pub mod random;
/// Equal-strip splitting
pub mod regular;
/// Division strategy selection
pub mod selection;
/// Uneven thirds and halves splitting
pub mod unequal;
