pub mod controller;
mod surface;
mod timer;

#[cfg(test)]
mod tests;

pub use controller::*;
pub use surface::*;
pub use timer::*;
