// Learning-resource discovery: strategies, aggregation, validation and ranking.

pub mod aggregator;
pub mod curated;
pub mod handlers;
pub mod normalize;
pub mod parser;
pub mod prompts;
pub mod providers;
pub mod ranker;
pub mod strategies;
pub mod validation;
