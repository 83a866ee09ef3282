pub mod fuel;
pub mod plan;
pub mod plant;

pub use fuel::*;
pub use plan::*;
pub use plant::*;
