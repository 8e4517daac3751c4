pub mod config;
pub mod error;
pub mod fruit;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod segments;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
