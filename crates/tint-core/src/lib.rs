/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all tint crates
//!
//! It currently contains
//!
//! - A byte reader used by the netpbm decoder
//! - Channel identifiers shared by images and operations
//! - Decoder options
//! - A logging facade that is a no-op unless the `log` feature is enabled
//!
//! # Features
//!  - `log`: Forward `tint_core::log` macros to the [log](https://crates.io/crates/log) crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate

pub mod bytestream;
pub mod channel;
pub mod log;
pub mod options;
pub mod serde;
