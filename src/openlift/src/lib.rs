#[macro_use]
extern crate log;

mod openlift;
pub use openlift::OpenLift;

pub use openlift_db::DatabaseHandler;
