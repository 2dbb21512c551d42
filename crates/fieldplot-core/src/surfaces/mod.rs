// File: crates/fieldplot-core/src/surfaces/mod.rs
// Summary: Per-sport surface facades: dimension registries and figure builders.

pub mod baseball;
pub mod basketball;
pub mod football;
pub mod hockey;
