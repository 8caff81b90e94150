mod contract;
mod contracts;
mod error;
mod memory;
mod swap_settings;

pub use {contract::*, contracts::*, error::*, memory::*, swap_settings::*};
