pub mod formatter;
pub mod presenter;

pub use formatter::Formatter;
pub use presenter::{CycleOutcome, Presenter, Stoppable};
