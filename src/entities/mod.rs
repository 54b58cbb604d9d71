pub mod diorama;
pub mod food;
pub mod ground;
pub mod snake;

pub use diorama::Diorama;
pub use food::Food;
pub use ground::Ground;
pub use snake::Snake;
