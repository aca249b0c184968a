pub mod http;
pub(crate) mod runtime;
pub(crate) mod util;
