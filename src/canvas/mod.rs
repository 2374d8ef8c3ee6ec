pub(crate) mod alloc;
pub(crate) mod config;
pub(crate) mod frame;
pub(crate) mod store;
