pub(crate) mod config;
pub(crate) mod db;
pub(crate) mod os;
pub(crate) mod telemetry;
