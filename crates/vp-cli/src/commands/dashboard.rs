//! Render the role dashboard as data.
//!
//! The stats and certificate summaries are the portal's static demo
//! content; the only live inputs are the identity fields supplied by the
//! session manager. Presentation holds no session truth of its own.

use chrono::NaiveDate;
use serde::Serialize;
use vp_config::PortalConfig;
use vp_core::{Dashboard, Identity};
use vp_router::Route;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct Stat {
    label: &'static str,
    value: String,
}

#[derive(Serialize)]
struct CertificateSummary {
    id: &'static str,
    title: &'static str,
    institution: &'static str,
    issue_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiry_date: Option<NaiveDate>,
    status: &'static str,
    grade: &'static str,
    credential_id: &'static str,
}

#[derive(Serialize)]
struct DashboardResponse {
    view: String,
    title: &'static str,
    subtitle: String,
    stats: Vec<Stat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    certificates: Option<Vec<CertificateSummary>>,
}

#[derive(Serialize)]
struct SignedOutResponse {
    view: &'static str,
    message: &'static str,
}

pub async fn handle(flags: &GlobalFlags, config: &PortalConfig) -> anyhow::Result<()> {
    let manager = super::open_session(flags, config).await?;

    match vp_router::resolve(&manager.state()) {
        Route::Pending => output(
            &SignedOutResponse {
                view: "pending",
                message: "session still resolving",
            },
            flags.format,
        ),
        Route::SignIn => output(
            &SignedOutResponse {
                view: "sign_in",
                message: "not signed in — run `vpt auth login`",
            },
            flags.format,
        ),
        Route::Dashboard(dashboard) => {
            // a dashboard route implies a held identity
            let identity = manager
                .current_identity()
                .ok_or_else(|| anyhow::anyhow!("authenticated route without an identity"))?;
            output(&render_dashboard(dashboard, &identity), flags.format)
        }
    }
}

fn render_dashboard(dashboard: Dashboard, identity: &Identity) -> DashboardResponse {
    let organization = identity
        .organization
        .clone()
        .unwrap_or_else(|| String::from("Organization"));

    match dashboard {
        Dashboard::Admin => DashboardResponse {
            view: dashboard.to_string(),
            title: dashboard.title(),
            subtitle: format!("Welcome back, {}", identity.display_name),
            stats: vec![
                stat("Total Users", "12,543"),
                stat("Partner Institutions", "456"),
                stat("Verified Certificates", "98,234"),
                stat("Pending Reviews", "23"),
            ],
            certificates: None,
        },
        Dashboard::Student => {
            let certificates = student_certificates();
            let verified = certificates.iter().filter(|c| c.status == "verified").count();
            let pending = certificates.iter().filter(|c| c.status == "pending").count();
            DashboardResponse {
                view: dashboard.to_string(),
                title: dashboard.title(),
                subtitle: format!("Manage your academic credentials, {}", identity.display_name),
                stats: vec![
                    stat("Total Certificates", &certificates.len().to_string()),
                    stat("Verified", &verified.to_string()),
                    stat("Pending", &pending.to_string()),
                    stat("Downloads", "47"),
                ],
                certificates: Some(certificates),
            }
        }
        Dashboard::Institution => DashboardResponse {
            view: dashboard.to_string(),
            title: dashboard.title(),
            subtitle: format!("{organization} - Certificate Management Portal"),
            stats: vec![
                stat("Total Certificates Issued", "15,432"),
                stat("Active Students", "3,567"),
                stat("Pending Requests", "42"),
                stat("Verification Rate", "99.8%"),
            ],
            certificates: None,
        },
        Dashboard::Employer => DashboardResponse {
            view: dashboard.to_string(),
            title: dashboard.title(),
            subtitle: format!("Screen candidate credentials for {organization}"),
            stats: vec![
                stat("Certificates Verified", "2,543"),
                stat("Candidates Screened", "1,234"),
                stat("Avg Verification Time", "12s"),
                stat("Success Rate", "98.7%"),
            ],
            certificates: None,
        },
    }
}

fn stat(label: &'static str, value: &str) -> Stat {
    Stat {
        label,
        value: value.to_string(),
    }
}

fn student_certificates() -> Vec<CertificateSummary> {
    vec![
        CertificateSummary {
            id: "cert_001",
            title: "Bachelor of Computer Science",
            institution: "Harvard University",
            issue_date: date(2024, 5, 15),
            expiry_date: None,
            status: "verified",
            grade: "Magna Cum Laude",
            credential_id: "HU-CS-2024-001234",
        },
        CertificateSummary {
            id: "cert_002",
            title: "Full Stack Web Development Certificate",
            institution: "Coursera - Meta",
            issue_date: date(2023, 12, 10),
            expiry_date: Some(date(2026, 12, 10)),
            status: "verified",
            grade: "95%",
            credential_id: "META-FSD-2023-5678",
        },
        CertificateSummary {
            id: "cert_003",
            title: "Data Science Specialization",
            institution: "Johns Hopkins University",
            issue_date: date(2023, 8, 20),
            expiry_date: None,
            status: "pending",
            grade: "89%",
            credential_id: "JHU-DS-2023-9012",
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
