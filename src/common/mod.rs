pub mod constants;
pub mod error;
pub mod glyphs;
pub mod input;
pub mod mandelbrot;
pub mod render;
