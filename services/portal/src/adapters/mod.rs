pub mod console;
pub mod gateway;
pub mod storage;
