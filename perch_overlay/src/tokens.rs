// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style tokens.
//!
//! Opaque enum → class-name lookups. Nothing in this crate interprets the
//! strings; they are handed to the renderer as-is.

/// Corner rounding.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rounded {
    /// Square corners.
    None,
    /// Small radius.
    Sm,
    /// Medium radius.
    #[default]
    Md,
    /// Large radius.
    Lg,
    /// Extra-large radius.
    Xl,
}

impl Rounded {
    /// Class name for this token.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::None => "ac-rounded-none",
            Self::Sm => "ac-rounded-sm",
            Self::Md => "ac-rounded-[4px]",
            Self::Lg => "ac-rounded-md",
            Self::Xl => "ac-rounded-lg",
        }
    }
}

/// Drop shadow level.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shadow {
    /// No shadow.
    None,
    /// Small shadow.
    Sm,
    /// Medium shadow.
    #[default]
    Md,
    /// Large shadow.
    Lg,
    /// Extra-large shadow.
    Xl,
}

impl Shadow {
    /// Class name for this token.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::None => "ac-shadow-none",
            Self::Sm => "ac-shadow-sm",
            Self::Md => "ac-shadow-md",
            Self::Lg => "ac-shadow-lg",
            Self::Xl => "ac-shadow-xl",
        }
    }
}
