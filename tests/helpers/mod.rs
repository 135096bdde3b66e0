pub use assert::*;

mod assert;
