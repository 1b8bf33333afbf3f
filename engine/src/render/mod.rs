pub mod graphics;
mod pipeline;
mod vertex;
