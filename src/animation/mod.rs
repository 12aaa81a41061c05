pub mod ease;
pub mod object;
pub mod timing;
