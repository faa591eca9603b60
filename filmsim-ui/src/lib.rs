pub mod app;
pub mod logging;
pub mod runner;
pub mod screens;
pub mod util;
