pub(crate) mod constant;
pub(crate) mod coordinated_reader;
pub(crate) mod utils;
