pub mod ppm;

pub use ppm::{save_ppm, write_ppm};
