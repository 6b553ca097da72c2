pub mod authorization;
pub mod transaction_manager;
