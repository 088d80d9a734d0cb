pub(crate) mod composer;
pub(crate) mod error;
pub(crate) mod image_ext;
pub(crate) mod rule;
pub(crate) mod token;
