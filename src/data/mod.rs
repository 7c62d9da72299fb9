//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! per-guild table. Repositories use SeaORM entity models internally and return domain
//! models to maintain separation between the data layer and business logic layer. Rows
//! are created on first reference, so most lookups are get-or-create.

pub mod guild;
pub mod member;
pub mod role_list;
pub mod ticket;
pub mod ticket_bot;
pub mod ticket_type;

#[cfg(test)]
mod test;
