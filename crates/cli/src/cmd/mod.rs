mod analyze;
mod checksum;
mod deps;
mod devices;
mod export_options;
mod generate;
mod plan;
mod quick;
mod sign;
mod signing;
mod validate;

pub use analyze::cmd_analyze;
pub use checksum::cmd_checksum;
pub use deps::cmd_deps;
pub use devices::cmd_devices;
pub use export_options::cmd_export_options;
pub use generate::cmd_generate;
pub use plan::cmd_plan;
pub use quick::cmd_quick;
pub use sign::{cmd_sign, cmd_verify_sig};
pub use signing::cmd_signing;
pub use validate::cmd_validate;
