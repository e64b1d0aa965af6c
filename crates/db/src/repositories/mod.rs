//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod approval_repo;
pub mod customer_repo;
pub mod file_repo;
pub mod folder_repo;
pub mod message_repo;
pub mod offer_item_repo;
pub mod project_repo;
pub mod read_receipt_repo;
pub mod staff_repo;

pub use approval_repo::ApprovalRepo;
pub use customer_repo::CustomerRepo;
pub use file_repo::FileRepo;
pub use folder_repo::FolderRepo;
pub use message_repo::MessageRepo;
pub use offer_item_repo::OfferItemRepo;
pub use project_repo::ProjectRepo;
pub use read_receipt_repo::ReadReceiptRepo;
pub use staff_repo::StaffRepo;
