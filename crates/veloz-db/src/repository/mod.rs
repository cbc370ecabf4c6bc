//! Repository implementations.
//!
//! One repository per entity, each holding a cheap clone of the pool.

pub mod car;
pub mod category;
