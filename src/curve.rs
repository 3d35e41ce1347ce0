pub mod cache;
pub mod hilbert;
