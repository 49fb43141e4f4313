mod extract;
mod responses;

pub use extract::{ApiJson, ApiPath};
pub use responses::*;
