pub mod app;
pub mod camera;
pub mod cli;
pub mod context;
pub mod entities;
pub mod error;
pub mod frame;
pub mod lifecycle;
pub mod mesh;
pub mod post;
pub mod renderer;
pub mod scene;
pub mod types;

pub use context::SceneContext;
pub use frame::{FrameClock, FrameInfo};
pub use lifecycle::LifeCycle;
pub use renderer::{RenderOptions, Renderer};
pub use scene::Scene;
