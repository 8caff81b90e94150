mod amount;
mod config;
mod error;
mod fee_rate;
mod parse;
mod plain;
mod serde_str;

pub use {amount::*, config::*, error::*, fee_rate::*, parse::*, plain::*};
