pub mod console;
pub mod presenter;
