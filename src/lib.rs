pub mod cli;
pub mod commands;
pub mod error;

pub mod core {
    pub mod dataset;
    pub mod record;
}

pub mod io {
    pub mod printer;
}

pub mod utils {
    pub mod util;
}

pub mod constants;

pub use constants::*;
