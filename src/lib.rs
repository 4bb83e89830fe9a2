//! Monthly mortgage payment calculation behind a terminal loan form.

pub mod payment;
