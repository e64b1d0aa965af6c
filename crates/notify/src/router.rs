//! Upload notification routing.
//!
//! [`NotificationRouter`] decides, for one upload event, who gets notified
//! and with which message, then hands the composed email to the transport.
//! Routing is best-effort relative to the upload that triggered it: every
//! failure mode inside the router — unresolved project or customer, missing
//! contact info, unconfigured or failing transport — degrades to a
//! [`RouteOutcome::Skipped`] and is logged, never raised to the caller.

use std::sync::Arc;

use reportal_core::business_days::report_approval_deadline;
use reportal_core::routing::UploadDirection;
use reportal_core::types::{DbId, Timestamp};

use crate::directory::{CustomerEntry, Directory, ProjectEntry};
use crate::email::{MailTransport, OutgoingEmail};
use crate::templates;

// ---------------------------------------------------------------------------
// Event and outcome
// ---------------------------------------------------------------------------

/// One file upload, as reported by the upload flow.
#[derive(Debug, Clone)]
pub struct UploadEvent {
    pub project_id: DbId,
    pub folder_path: String,
    pub file_name: String,
    /// Report uploads carry an approval deadline notice.
    pub is_report: bool,
    /// When the upload happened. The deadline in report notices is derived
    /// from this, not from the time the notification is sent.
    pub uploaded_at: Timestamp,
}

/// Why a notification was intentionally not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The project could not be resolved.
    UnknownProject,
    /// The project's customer could not be resolved.
    UnknownCustomer,
    /// The customer has no stored email address.
    NoEmail,
    /// No enabled staff users are on record.
    NoStaff,
    /// Email delivery is not configured (`SMTP_HOST` unset).
    MailUnconfigured,
    /// The transport raised an error; it was logged and swallowed.
    SendFailed,
}

impl SkipReason {
    /// Wire representation used in trigger responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnknownProject => "unknown_project",
            Self::UnknownCustomer => "unknown_customer",
            Self::NoEmail => "no_email",
            Self::NoStaff => "no_staff",
            Self::MailUnconfigured => "mail_unconfigured",
            Self::SendFailed => "send_failed",
        }
    }
}

/// Result of routing one upload event. Never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The notification went out to `recipients` addresses.
    Sent { recipients: usize },
    /// The notification was intentionally skipped.
    Skipped { reason: SkipReason },
}

impl RouteOutcome {
    fn skipped(reason: SkipReason) -> Self {
        Self::Skipped { reason }
    }
}

/// Base URLs the message call-to-actions point at.
#[derive(Debug, Clone)]
pub struct PortalLinks {
    /// Staff-facing application, linked in customer-upload notices.
    pub staff_app_url: String,
    /// Customer portal, linked in staff-upload notices.
    pub customer_portal_url: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Routes upload events to the correct audience.
pub struct NotificationRouter {
    directory: Arc<dyn Directory>,
    /// `None` when email delivery is not configured; every route is then a
    /// soft skip.
    mailer: Option<Arc<dyn MailTransport>>,
    links: PortalLinks,
}

impl NotificationRouter {
    pub fn new(
        directory: Arc<dyn Directory>,
        mailer: Option<Arc<dyn MailTransport>>,
        links: PortalLinks,
    ) -> Self {
        Self {
            directory,
            mailer,
            links,
        }
    }

    /// Route one upload event.
    ///
    /// Always returns an outcome; any internal failure is logged and mapped
    /// to a skip.
    pub async fn route(&self, event: &UploadEvent) -> RouteOutcome {
        let project = match self.directory.project(event.project_id).await {
            Ok(Some(project)) => project,
            Ok(None) => {
                tracing::info!(project_id = event.project_id, "Project not found, skipping");
                return RouteOutcome::skipped(SkipReason::UnknownProject);
            }
            Err(e) => {
                tracing::error!(project_id = event.project_id, error = %e,
                    "Project lookup failed, skipping notification");
                return RouteOutcome::skipped(SkipReason::UnknownProject);
            }
        };

        let customer = match self.directory.customer(project.customer_id).await {
            Ok(customer) => customer,
            Err(e) => {
                tracing::error!(customer_id = project.customer_id, error = %e,
                    "Customer lookup failed, skipping notification");
                return RouteOutcome::skipped(SkipReason::UnknownCustomer);
            }
        };

        match UploadDirection::classify(&event.folder_path) {
            UploadDirection::FromCustomer => {
                self.notify_staff(event, &project, customer.as_ref()).await
            }
            UploadDirection::FromStaff => match customer {
                Some(customer) => self.notify_customer(event, &project, &customer).await,
                None => {
                    tracing::info!(
                        customer_id = project.customer_id,
                        "Customer not found, skipping"
                    );
                    RouteOutcome::skipped(SkipReason::UnknownCustomer)
                }
            },
        }
    }

    /// Upload by the customer: fan out one send to every enabled staff
    /// address. Sender display name carries the customer identity; replies
    /// go to the customer when their address is known.
    async fn notify_staff(
        &self,
        event: &UploadEvent,
        project: &ProjectEntry,
        customer: Option<&CustomerEntry>,
    ) -> RouteOutcome {
        let staff = match self.directory.staff_emails().await {
            Ok(staff) => staff,
            Err(e) => {
                tracing::error!(error = %e, "Staff lookup failed, skipping notification");
                return RouteOutcome::skipped(SkipReason::NoStaff);
            }
        };
        if staff.is_empty() {
            tracing::info!("No enabled staff users on record, skipping");
            return RouteOutcome::skipped(SkipReason::NoStaff);
        }

        let customer_label = customer
            .map(customer_display_label)
            .unwrap_or_else(|| format!("Customer #{}", project.customer_id));

        let message = templates::customer_upload_to_staff(
            &customer_label,
            project,
            &event.folder_path,
            &event.file_name,
            &self.links.staff_app_url,
        );

        let mail = OutgoingEmail {
            to: staff,
            sender_name: Some(customer_label),
            reply_to: customer.and_then(|c| c.email.clone()),
            subject: message.subject,
            html: message.html,
            text: message.text,
        };
        self.send(mail).await
    }

    /// Upload by staff: notify the customer on file. Reports get the
    /// deadline notice, derived from the event's upload time.
    async fn notify_customer(
        &self,
        event: &UploadEvent,
        project: &ProjectEntry,
        customer: &CustomerEntry,
    ) -> RouteOutcome {
        let Some(email) = customer.email.clone() else {
            tracing::info!(
                customer_number = %customer.number,
                "Customer has no stored email, skipping"
            );
            return RouteOutcome::skipped(SkipReason::NoEmail);
        };

        let message = if event.is_report {
            let deadline = report_approval_deadline(event.uploaded_at);
            templates::staff_report_to_customer(
                project,
                &event.folder_path,
                &event.file_name,
                deadline,
                &self.links.customer_portal_url,
            )
        } else {
            templates::staff_file_to_customer(
                project,
                &event.folder_path,
                &event.file_name,
                &self.links.customer_portal_url,
            )
        };

        let mail = OutgoingEmail {
            to: vec![email],
            sender_name: None,
            reply_to: None,
            subject: message.subject,
            html: message.html,
            text: message.text,
        };
        self.send(mail).await
    }

    async fn send(&self, mail: OutgoingEmail) -> RouteOutcome {
        let Some(mailer) = &self.mailer else {
            tracing::info!("Email delivery not configured, skipping notification");
            return RouteOutcome::skipped(SkipReason::MailUnconfigured);
        };

        let recipients = mail.to.len();
        match mailer.send(&mail).await {
            Ok(()) => RouteOutcome::Sent { recipients },
            Err(e) => {
                tracing::error!(error = %e, subject = %mail.subject,
                    "Notification send failed; upload is unaffected");
                RouteOutcome::skipped(SkipReason::SendFailed)
            }
        }
    }
}

/// Customer display label: name when present, customer number otherwise.
fn customer_display_label(customer: &CustomerEntry) -> String {
    match &customer.name {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => format!("Customer {}", customer.number),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
