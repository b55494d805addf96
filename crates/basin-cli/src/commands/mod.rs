pub mod alert;
pub mod dispatch;
pub mod field;
pub mod overview;
pub mod report;
pub mod serve;
pub mod shared;
pub mod solution;
pub mod solve;
pub mod zone;
