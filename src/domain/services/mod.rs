pub mod export;
pub mod identity;
pub mod lifecycle;
pub mod scheduling;
