pub mod calculate;
pub mod export;
pub mod params;
pub mod report;
pub mod scenarios;
