pub mod detector;
pub mod history;
pub mod markup;
pub mod offline;
pub mod orchestrator;
pub mod session;
pub mod translator;
