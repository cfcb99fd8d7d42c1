pub(crate) mod generate;
pub(crate) mod interactive;
mod render;
