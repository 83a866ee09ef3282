pub mod allocate;
pub mod dispatch;
pub mod enrich;
pub mod error;
pub mod fuel_table;
pub mod merit_order;
pub mod repair;
pub mod types;

pub use allocate::*;
pub use dispatch::*;
pub use enrich::*;
pub use error::*;
pub use fuel_table::*;
pub use merit_order::MeritOrder;
pub use repair::*;
pub use types::*;
