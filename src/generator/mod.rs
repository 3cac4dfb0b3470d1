// src/generator/mod.rs
//
// Cave pipeline, leaves first:
// seeder -> smoother -> regions/rooms -> connector -> passage -> border.
pub mod border;
pub mod cave_generator;
pub mod config;
pub mod connector;
pub mod error;
pub mod passage;
pub mod regions;
pub mod rooms;
pub mod seeder;
pub mod smoother;

pub use cave_generator::{generate, CaveGenerator, CaveMap, GenerationStats};
pub use config::GeneratorConfig;
pub use error::{CaveError, Result};
pub use passage::Passage;
pub use regions::Region;
pub use rooms::Room;
