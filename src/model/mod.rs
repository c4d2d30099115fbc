pub mod genes;
pub mod pairs;
pub mod relation;
