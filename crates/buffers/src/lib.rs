//! Binary buffer primitives for scalar-pack.

mod writer;

pub use writer::Writer;
