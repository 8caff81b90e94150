mod address;
mod chain;
mod deployment;
mod error;
mod swap;
mod token;

pub use {address::*, chain::*, deployment::*, error::*, swap::*, token::*};
