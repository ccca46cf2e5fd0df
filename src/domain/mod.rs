pub mod decision;
pub mod draft;
pub mod payment;
pub mod ports;
pub mod transaction;
