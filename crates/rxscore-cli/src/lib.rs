//! Library components of the `rxscore` operator CLI.

pub mod logging;
pub mod requests;
