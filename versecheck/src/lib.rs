pub mod analyze;
pub mod models;
pub mod report;
pub mod shared;

pub mod prelude {
    pub use crate::analyze::prelude::*;
    pub use crate::models::prelude::*;
    pub use crate::report::prelude::*;
    pub use crate::shared::prelude::*;
}
