//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

#![warn(rust_2018_idioms)]

pub mod device;
pub mod error;
pub mod interface;
pub mod parser;
pub mod schema;
pub mod template;
#[cfg(feature = "testing")]
pub mod testing;

pub use error::Error;
pub use parser::{Arguments, Entry, Input, Parser};
pub use schema::Schema;
pub use template::Params;
