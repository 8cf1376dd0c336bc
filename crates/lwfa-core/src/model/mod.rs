pub mod beam;
pub mod laser;
pub mod matching;
pub mod plasma;
pub mod simulation;
