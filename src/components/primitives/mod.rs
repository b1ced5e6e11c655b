//! Primitives - Basic Building Blocks

pub mod button;
pub mod text_input;
