//! Contract model matching the frontend Contract interface.

use serde::{Deserialize, Serialize};

use super::Identified;

/// Billing arrangement of a contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Hourly,
    Project,
    Retainer,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Hourly => "hourly",
            ContractType::Project => "project",
            ContractType::Retainer => "retainer",
        }
    }
}

/// Lifecycle status of a contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Active,
    Completed,
    Terminated,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Active => "active",
            ContractStatus::Completed => "completed",
            ContractStatus::Terminated => "terminated",
        }
    }
}

/// A service contract with a freelancer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    /// Identity of the referenced freelancer record.
    pub freelancer_id: String,
    /// Snapshot of the freelancer's name taken at creation time. Not kept
    /// in sync with later changes to the referenced record.
    pub freelancer_name: String,
    pub contract_type: ContractType,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub status: ContractStatus,
    pub rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
    pub description: String,
}

impl Identified for Contract {
    fn entity_id(&self) -> &str {
        &self.id
    }
}
