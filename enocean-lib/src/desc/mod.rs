//! Static name lookups for packet types, manufacturers and equipment profiles.
mod eep;
mod manufacturer;
mod packet_type;

pub use eep::{describe_eep, EepDescription};
pub use manufacturer::{manufacturer_name, manufacturers};
pub use packet_type::packet_type_description;
