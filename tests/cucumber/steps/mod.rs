// Cucumber Step Definitions Module
//
// Step definitions are grouped by the document section they exercise.

pub mod common;
pub mod definitions;
pub mod paths;

pub use common::SwaggifyWorld;
