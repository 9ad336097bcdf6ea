pub mod greeting;

pub use greeting::{greet, render};
