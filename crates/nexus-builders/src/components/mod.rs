pub mod assertions;
pub mod button;
pub mod component;
pub mod types;
