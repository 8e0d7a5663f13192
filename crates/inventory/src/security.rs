use serde::{Deserialize, Serialize};

/// Severity tag on a vulnerability-scan finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Pass,
}

impl Severity {
    #[must_use]
    pub fn badge(&self) -> &'static str {
        match self {
            Severity::High   => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Pass   => "PASS",
        }
    }
}

/// One headline card on the security view (encryption, access, DR).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostureCard {
    pub area: String,
    pub headline: String,
    pub detail: String,
}

/// One vulnerability-scan result line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub summary: String,
    pub severity: Severity,
}

/// One compliance-framework row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub framework: String,
    pub detail: String,
    pub status: String,
}

/// Full security & protection posture shown on the security view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityPosture {
    pub cards: Vec<PostureCard>,
    pub scan_id: String,
    pub findings: Vec<Finding>,
    pub compliance: Vec<ComplianceItem>,
}

/// Static posture — the assessment data has no live scanner behind it.
#[must_use]
pub fn posture() -> SecurityPosture {
    SecurityPosture {
        cards: vec![
            PostureCard {
                area:     "Data At Rest".to_string(),
                headline: "AES-256 Enabled".to_string(),
                detail:   "Key rotation scheduled in 14 days.".to_string(),
            },
            PostureCard {
                area:     "Access Control".to_string(),
                headline: "RBAC Active".to_string(),
                detail:   "MFA enforced for all Admin accounts.".to_string(),
            },
            PostureCard {
                area:     "Disaster Recovery".to_string(),
                headline: "Sync Active".to_string(),
                detail:   "Last snapshot: 10 mins ago (RPO < 15m).".to_string(),
            },
        ],
        scan_id: "#992-AZX".to_string(),
        findings: vec![
            Finding {
                summary:  "Outdated Firmware (SAN-02)".to_string(),
                severity: Severity::High,
            },
            Finding {
                summary:  "Weak TLS Cipher Suite detected".to_string(),
                severity: Severity::Medium,
            },
            Finding {
                summary:  "User Permissions Audit".to_string(),
                severity: Severity::Pass,
            },
        ],
        compliance: vec![
            ComplianceItem {
                framework: "SOC 2 Type II".to_string(),
                detail:    "Audit Period: 2023-2024".to_string(),
                status:    "COMPLIANT".to_string(),
            },
            ComplianceItem {
                framework: "ISO/IEC 27001".to_string(),
                detail:    "ISMS Operational".to_string(),
                status:    "CERTIFIED".to_string(),
            },
            ComplianceItem {
                framework: "GDPR".to_string(),
                detail:    "Data Processor Agreement".to_string(),
                status:    "COMPLIANT".to_string(),
            },
        ],
    }
}
