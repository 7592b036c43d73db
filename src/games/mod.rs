pub mod roulette;

pub use roulette::RouletteRules;
