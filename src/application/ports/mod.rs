// src/application/ports/mod.rs
pub mod image;
pub mod render;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ImageStyleUrlBuilderPort = dyn image::ImageStyleUrlBuilder;
pub type TextRendererPort = dyn render::TextRenderer;
