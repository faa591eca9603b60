pub mod charts;
pub mod inputs;
pub mod report;
pub mod request;
pub mod search;
