mod client_type;
mod device_type;
mod user_agent;

pub use client_type::*;
pub use device_type::*;
pub use user_agent::*;
