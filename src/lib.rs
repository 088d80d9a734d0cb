mod core;
mod public;
#[cfg(test)]
mod tests;

pub use crate::core::coordinated_reader::CoordinatedImageReader;
pub use public::composer::{FileDropComposer, compose_drop_text};
pub use public::error::DropError;
pub use public::image_ext::ImageInspector;
pub use public::rule::{DropRule, DropRules};
pub use public::token::Token;
