pub(crate) mod config;
pub(crate) mod queue;
pub(crate) mod registry;
pub(crate) mod scheduler;
