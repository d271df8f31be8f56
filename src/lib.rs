pub mod cli;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod logic;
pub mod messages;
pub mod prelude;
pub mod storage;
pub mod ui;
