//! Static process catalog and industry list
//!
//! Immutable configuration data loaded once at compile time. No write
//! access is ever required at runtime.

use serde::Serialize;

/// A process category a business could automate
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessCategory {
    pub id: &'static str,
    pub label: &'static str,
    /// Fraction of time/cost assumed recoverable through automation, in [0, 1]
    pub savings_multiplier: f64,
}

/// The fixed catalog of automatable process categories
pub const PROCESS_CATALOG: [ProcessCategory; 10] = [
    ProcessCategory {
        id: "data-entry",
        label: "Data Entry & Processing",
        savings_multiplier: 0.85,
    },
    ProcessCategory {
        id: "email-comms",
        label: "Email & Communications",
        savings_multiplier: 0.60,
    },
    ProcessCategory {
        id: "reporting",
        label: "Reporting & Analytics",
        savings_multiplier: 0.75,
    },
    ProcessCategory {
        id: "scheduling",
        label: "Scheduling & Calendar",
        savings_multiplier: 0.70,
    },
    ProcessCategory {
        id: "invoicing",
        label: "Invoicing & Billing",
        savings_multiplier: 0.80,
    },
    ProcessCategory {
        id: "customer-support",
        label: "Customer Support",
        savings_multiplier: 0.65,
    },
    ProcessCategory {
        id: "document-mgmt",
        label: "Document Management",
        savings_multiplier: 0.70,
    },
    ProcessCategory {
        id: "social-media",
        label: "Social Media Management",
        savings_multiplier: 0.55,
    },
    ProcessCategory {
        id: "crm-updates",
        label: "CRM Updates",
        savings_multiplier: 0.75,
    },
    ProcessCategory {
        id: "inventory",
        label: "Inventory Management",
        savings_multiplier: 0.65,
    },
];

/// Industry options offered by the calculator form
pub const INDUSTRIES: [&str; 10] = [
    "Professional Services",
    "Healthcare",
    "Real Estate",
    "E-Commerce",
    "Manufacturing",
    "Financial Services",
    "Legal",
    "Marketing Agency",
    "Construction",
    "Other",
];
