//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts where the engine performs them

pub mod approval;
pub mod customer;
pub mod file;
pub mod folder;
pub mod message;
pub mod project;
pub mod read_receipt;
pub mod staff;
