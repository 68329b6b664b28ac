// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use alloc::string::String;

use thiserror::Error;

/// Invalid drawer configuration.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum DrawerError {
    /// The custom size is empty, unitless, negative or not a number.
    ///
    /// Accepted forms are pixel lengths (`"500px"`) and percentages of the
    /// viewport (`"90%"`).
    #[error("invalid drawer size {value:?}: expected a length like \"500px\" or \"90%\"")]
    InvalidCustomSize {
        /// The rejected input.
        value: String,
    },
}
