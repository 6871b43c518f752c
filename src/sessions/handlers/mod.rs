pub mod http;
pub mod responses;
pub mod round;
pub mod session;
