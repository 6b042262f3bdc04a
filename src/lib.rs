pub mod camera;
pub mod error;
pub mod input;
pub mod settings;

pub const CONFY_APP_NAME: &str = "flycam";
