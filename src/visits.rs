mod data;
mod domain;
mod http;

pub(crate) use http::{router, PATH};
