//! Authentication strategies.
//!
//! A strategy inspects a [`Request`](crate::Request) and signals exactly one
//! [`Outcome`]: success, fail, redirect or pass. Errors travel through the
//! `Err` arm of [`Strategy::authenticate`].

mod strategy;
pub use self::strategy::{Base, Options, Strategy};

mod outcome;
pub use self::outcome::{Challenge, Outcome};

mod local;
pub use self::local::Local;

mod bearer;
pub use self::bearer::Bearer;

mod anonymous;
pub use self::anonymous::Anonymous;
