pub mod config;
pub mod events;
pub mod macros;
pub mod nav;
pub mod orbit;
pub mod session;
pub mod sys;
