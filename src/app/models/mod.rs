pub mod agents;
pub mod legal;
pub mod payments;
pub mod vault;
pub mod workflows;

pub use agents::*;
pub use legal::*;
pub use payments::*;
pub use vault::*;
pub use workflows::*;
