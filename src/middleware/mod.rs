pub mod layers;

pub use layers::apply_layers;
