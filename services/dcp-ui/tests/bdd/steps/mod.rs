//! BDD step definitions for the DCP UI host

pub mod forwarding_steps;
pub mod shell_steps;
