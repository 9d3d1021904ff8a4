/// Summary statistics of generated layouts
pub mod statistics;
/// Checks of layout invariants over traced partitions
pub mod validation;
