pub mod details;
pub mod search_results;
