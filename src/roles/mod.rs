pub mod connectivity;
pub mod loader;
pub mod verifier;
