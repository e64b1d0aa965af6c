//! Notification infrastructure for portal uploads.
//!
//! This crate provides the building blocks for upload notifications:
//!
//! - [`email`] — SMTP delivery via `lettre`, behind the [`MailTransport`]
//!   seam so routing logic can be exercised without a mail server.
//! - [`directory`] — lookup seam resolving projects, customers, and the
//!   staff list.
//! - [`templates`] — role-specific message composition.
//! - [`router`] — the routing engine deciding audience and message for an
//!   upload event. Notification is best-effort: every failure inside the
//!   router degrades to a soft skip, never an error for the caller.

pub mod directory;
pub mod email;
pub mod router;
pub mod templates;

pub use directory::{CustomerEntry, Directory, DirectoryError, PgDirectory, ProjectEntry};
pub use email::{EmailConfig, EmailError, MailTransport, OutgoingEmail, SmtpMailer};
pub use router::{NotificationRouter, PortalLinks, RouteOutcome, SkipReason, UploadEvent};
