//! Core simulation primitives

pub mod clock;
