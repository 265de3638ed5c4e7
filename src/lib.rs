pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod renderer;
pub mod types;

pub use camera::{Camera, Projection};
pub use controller::{
    ActiveController, CameraController, ControllerCommand, OrthographicController,
    PerspectiveController,
};
