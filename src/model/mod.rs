pub mod configs;
pub mod record;
pub mod report;
