pub mod item;
pub mod mesh;
