//! Role-specific notification message composition.
//!
//! Three message shapes exist: a staff-facing notice for customer uploads,
//! and two customer-facing notices for staff uploads (reports carry an
//! approval deadline and a review call-to-action, other files a generic
//! one). Bodies are rendered as plain text plus minimal HTML.

use reportal_core::types::Timestamp;

use crate::directory::ProjectEntry;

/// Subject and both body renderings of one notification.
#[derive(Debug, Clone)]
pub struct RenderedMessage {
    pub subject: String,
    pub html: String,
    pub text: String,
}

fn file_location(folder_path: &str, file_name: &str) -> String {
    let folder = folder_path.trim_matches('/');
    if folder.is_empty() {
        file_name.to_string()
    } else {
        format!("{folder}/{file_name}")
    }
}

/// Staff notice: a customer uploaded a file into their submission zone.
pub fn customer_upload_to_staff(
    customer_label: &str,
    project: &ProjectEntry,
    folder_path: &str,
    file_name: &str,
    staff_app_url: &str,
) -> RenderedMessage {
    let location = file_location(folder_path, file_name);
    let subject = format!(
        "New customer upload in project {} ({})",
        project.name, project.number
    );
    let text = format!(
        "{customer_label} uploaded a new file.\n\n\
         Project: {} ({})\n\
         File: {location}\n\n\
         Review it in the staff portal: {staff_app_url}",
        project.name, project.number
    );
    let html = format!(
        "<p><strong>{customer_label}</strong> uploaded a new file.</p>\
         <p>Project: {} ({})<br>File: {location}</p>\
         <p><a href=\"{staff_app_url}\">Open the staff portal</a></p>",
        project.name, project.number
    );
    RenderedMessage {
        subject,
        html,
        text,
    }
}

/// Customer notice for a staff-uploaded report, including the auto-approval
/// deadline stamped at upload time.
pub fn staff_report_to_customer(
    project: &ProjectEntry,
    folder_path: &str,
    file_name: &str,
    deadline: Timestamp,
    portal_url: &str,
) -> RenderedMessage {
    let location = file_location(folder_path, file_name);
    let deadline_date = deadline.format("%Y-%m-%d");
    let subject = format!("New report for project {} — review requested", project.name);
    let text = format!(
        "A new report is ready for your review.\n\n\
         Project: {} ({})\n\
         File: {location}\n\n\
         Please review and approve it in the portal: {portal_url}\n\
         Without a response it is treated as approved on {deadline_date}.",
        project.name, project.number
    );
    let html = format!(
        "<p>A new report is ready for your review.</p>\
         <p>Project: {} ({})<br>File: {location}</p>\
         <p><a href=\"{portal_url}\">Review and approve it in the portal</a></p>\
         <p>Without a response it is treated as approved on <strong>{deadline_date}</strong>.</p>",
        project.name, project.number
    );
    RenderedMessage {
        subject,
        html,
        text,
    }
}

/// Customer notice for any other staff-uploaded file.
pub fn staff_file_to_customer(
    project: &ProjectEntry,
    folder_path: &str,
    file_name: &str,
    portal_url: &str,
) -> RenderedMessage {
    let location = file_location(folder_path, file_name);
    let subject = format!("New file available for project {}", project.name);
    let text = format!(
        "A new file is available in your project.\n\n\
         Project: {} ({})\n\
         File: {location}\n\n\
         View it in the portal: {portal_url}",
        project.name, project.number
    );
    let html = format!(
        "<p>A new file is available in your project.</p>\
         <p>Project: {} ({})<br>File: {location}</p>\
         <p><a href=\"{portal_url}\">View it in the portal</a></p>",
        project.name, project.number
    );
    RenderedMessage {
        subject,
        html,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn project() -> ProjectEntry {
        ProjectEntry {
            customer_id: 7,
            name: "Lakeside".to_string(),
            number: "P-1042".to_string(),
        }
    }

    #[test]
    fn staff_notice_names_the_customer_and_file() {
        let msg = customer_upload_to_staff(
            "Acme GmbH",
            &project(),
            "customer-uploads/2024",
            "invoice.pdf",
            "https://staff.example",
        );
        assert!(msg.text.contains("Acme GmbH"));
        assert!(msg.text.contains("customer-uploads/2024/invoice.pdf"));
        assert!(msg.html.contains("https://staff.example"));
    }

    #[test]
    fn report_notice_carries_the_deadline() {
        let deadline = Utc.with_ymd_and_hms(2024, 1, 12, 9, 0, 0).unwrap();
        let msg = staff_report_to_customer(
            &project(),
            "reports/2024",
            "summary.pdf",
            deadline,
            "https://portal.example",
        );
        assert!(msg.text.contains("2024-01-12"));
        assert!(msg.html.contains("2024-01-12"));
        assert!(msg.subject.contains("review requested"));
    }

    #[test]
    fn generic_notice_has_no_deadline_language() {
        let msg = staff_file_to_customer(
            &project(),
            "photos",
            "site.jpg",
            "https://portal.example",
        );
        assert!(!msg.text.contains("approved"));
        assert!(msg.text.contains("photos/site.jpg"));
    }

    #[test]
    fn root_folder_renders_bare_file_name() {
        let msg = staff_file_to_customer(&project(), "/", "site.jpg", "https://portal.example");
        assert!(msg.text.contains("File: site.jpg"));
    }
}
