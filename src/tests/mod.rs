mod image_lookup;
mod utils;
