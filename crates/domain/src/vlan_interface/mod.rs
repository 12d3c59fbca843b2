mod raw;
mod record;

pub use raw::RawInterfaceRow;
pub use record::{ExportedInterfaces, IrrdbFilter, SanitizedInterfaceRecord};

/// Ceiling applied when neither the VLAN interface nor the customer carries
/// a max-prefix limit.
pub const DEFAULT_MAX_PREFIXES: u32 = 250;
