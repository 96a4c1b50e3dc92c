pub mod language;
pub mod locale;
pub mod render;
pub mod response;
pub mod state;
