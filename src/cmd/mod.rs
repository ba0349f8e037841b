//! Command module structure for clause CLI

pub mod check;
pub mod util;
