pub mod demo;
pub mod sort;

pub use demo::demo;
pub use sort::sort;
