pub(crate) mod error;
pub(crate) mod index;
pub(crate) mod projects;

pub(crate) use error::ApiError;
