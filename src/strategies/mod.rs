pub mod adaptive;
pub mod fixed;
pub mod random;
