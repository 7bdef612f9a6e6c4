//! Section-tree rendering: walks the catalog into an ordered block sequence.

pub mod block;
pub mod renderer;
