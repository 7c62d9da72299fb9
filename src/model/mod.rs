//! Domain models shared by the data, service and bot layers.
//!
//! Repositories convert SeaORM entity models into these types at their boundary so
//! that snowflakes travel through the rest of the crate as `u64` and enumerated
//! columns as real enums.

pub mod guild;
pub mod member;
pub mod role_list;
pub mod ticket;
pub mod ticket_type;
