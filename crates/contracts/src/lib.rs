//! Bindings for the mintable token contract.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

use alloy::primitives::{Address, address};

/// Address of the deployed token that `token-mint` mints from.
pub const TOKEN_ADDRESS: Address = address!("0xF28BC1337898ca40BdaFacE3f1322feFA811A90F");

/// Helper macro to allow feature-gating rpc implementations behind the `rpc` feature.
macro_rules! sol {
    ($($input:tt)*) => {
        #[cfg(feature = "rpc")]
        alloy::sol! {
            #[sol(rpc)]
            $($input)*
        }
        #[cfg(not(feature = "rpc"))]
        alloy::sol! {
            $($input)*
        }
    };
}

pub(crate) use sol;

pub mod token;

pub use token::IMintableToken;
