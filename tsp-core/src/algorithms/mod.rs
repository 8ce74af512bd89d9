//! A collection of reusable algorithms which do not depend on any other module in the project.

pub mod held_karp;
pub mod structures;
