pub mod alexa;
pub mod game;
pub mod season;
