pub mod path;
pub mod tile;
