#![cfg_attr(not(feature = "std"), no_std)]

//! Fixed-point decibel conversion for integer-only signal chains.
//!
//! The core is a pair of pure, total functions moving between linear
//! `u64` magnitudes and `u32` millibel values (1 mB = 1/100 dB), built
//! entirely from integer arithmetic so it can run in allocation-free,
//! float-free paths. Floating-point helpers and register-step dB
//! scales sit alongside for userspace use.

pub mod fixed;
#[cfg(any(feature = "std", feature = "libm"))]
pub mod float;
pub mod scale;

pub use fixed::{db_to_linear, linear_to_db};
pub use scale::{DbScale, RawRange, ScaleError};
