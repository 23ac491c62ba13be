// File: crates/demo/src/lib.rs
// Summary: Library half of the demo so its data loading can be tested.

pub mod data;
