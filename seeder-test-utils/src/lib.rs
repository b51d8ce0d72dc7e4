pub mod error;
pub mod factory;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{factory, test_setup_with_event_tables, test_setup_with_tables, TestError, TestSetup};
}
