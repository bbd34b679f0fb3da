pub mod a001_car;
pub mod a002_order;
pub mod a003_user;
pub mod a004_message;
