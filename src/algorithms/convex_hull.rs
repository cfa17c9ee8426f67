pub mod brute_force;
pub mod gift_wrapping;
