//! Vendor capability record and the controlled vocabularies it uses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Level, TeamSize};

use super::OpenTableFormat;

/// Supported deployment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentModel {
    Cloud,
    OnPrem,
    Hybrid,
    Edge,
}

impl DeploymentModel {
    /// Returns the wire/display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentModel::Cloud => "cloud",
            DeploymentModel::OnPrem => "on-prem",
            DeploymentModel::Hybrid => "hybrid",
            DeploymentModel::Edge => "edge",
        }
    }
}

impl fmt::Display for DeploymentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pricing models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostModel {
    /// Per-GB ingestion (e.g. classic SIEM pricing).
    PerGb,
    /// Consumption/query-based.
    Consumption,
    /// Flat subscription.
    Subscription,
    /// Open source, infrastructure costs only.
    OpenSource,
    /// Mixed model.
    Hybrid,
}

impl CostModel {
    /// Returns the wire/display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            CostModel::PerGb => "per-gb",
            CostModel::Consumption => "consumption",
            CostModel::Subscription => "subscription",
            CostModel::OpenSource => "open-source",
            CostModel::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product maturity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maturity {
    Production,
    Beta,
    Experimental,
}

impl Maturity {
    /// Returns the wire/display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Maturity::Production => "production",
            Maturity::Beta => "beta",
            Maturity::Experimental => "experimental",
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vendor platform capabilities used for filtering and scoring.
///
/// Read-only during a filtering/scoring session. Fields with `serde(default)`
/// may be absent in catalog JSON; the engines treat absent optional data as
/// fail-open, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    // Core query capabilities
    /// Supports SQL queries (vs proprietary query language).
    pub sql_interface: bool,
    /// Real-time/streaming query capability.
    #[serde(default)]
    pub streaming_query: bool,
    /// Can query data across multiple engines.
    #[serde(default)]
    pub multi_engine_query: bool,

    // Data format and interoperability
    /// Open table format support (Iceberg, Delta, Hudi, proprietary).
    pub open_table_format: OpenTableFormat,
    /// Supports schema evolution without data migration.
    #[serde(default)]
    pub schema_evolution: bool,
    /// Native or plugin Apache Iceberg support.
    #[serde(default)]
    pub iceberg_support: bool,
    /// Delta Lake read/write support.
    #[serde(default)]
    pub delta_lake_support: bool,

    // Deployment and infrastructure
    /// Supported deployment models (cloud, on-prem, hybrid, edge).
    pub deployment_models: Vec<DeploymentModel>,
    /// Built cloud-native (vs retrofitted for cloud).
    pub cloud_native: bool,
    /// Supports multi-cloud deployments.
    #[serde(default)]
    pub multi_cloud: bool,

    // Operational complexity
    /// Operational overhead.
    pub operational_complexity: Level,
    /// Fully managed service available.
    #[serde(default)]
    pub managed_service_available: bool,
    /// Minimum team size to operate effectively.
    pub team_size_required: TeamSize,

    // Cost and licensing
    /// Pricing model.
    pub cost_model: CostModel,
    /// Cost predictability.
    pub cost_predictability: Level,

    // Security-specific capabilities
    /// Integrates with SIEM platforms.
    #[serde(default)]
    pub siem_integration: bool,
    /// Compliance certifications (SOC2, FedRAMP, ISO27001, ...).
    #[serde(default)]
    pub compliance_certifications: Vec<String>,
    /// Built-in data governance and access control.
    #[serde(default)]
    pub data_governance: bool,

    // Maturity and support
    /// Product maturity level.
    pub maturity: Maturity,
    /// Vendor support tier (enterprise, standard, community), if any.
    #[serde(default)]
    pub vendor_support: Option<String>,
    /// Community size for OSS projects.
    #[serde(default = "default_community_size")]
    pub community_size: String,

    // Advanced capabilities
    /// Supports the Open Cybersecurity Schema Framework.
    #[serde(default)]
    pub ocsf_support: bool,
    /// Built-in ML/analytics capabilities.
    #[serde(default)]
    pub ml_analytics: bool,
    /// Rich API for extensibility and automation.
    #[serde(default)]
    pub api_extensibility: bool,

    // Performance characteristics
    /// P95 query latency in milliseconds, if published.
    #[serde(default)]
    pub query_latency_p95: Option<u32>,
    /// Sustained concurrent query count, if published.
    #[serde(default)]
    pub query_concurrency: Option<u32>,
}

fn default_community_size() -> String {
    "unknown".to_string()
}

impl Capabilities {
    /// True when the vendor is priced as open source.
    pub fn is_open_source(&self) -> bool {
        self.cost_model == CostModel::OpenSource
    }

    /// True when the vendor declares an enterprise or standard support tier.
    pub fn has_commercial_support(&self) -> bool {
        matches!(
            self.vendor_support.as_deref(),
            Some("enterprise") | Some("standard")
        )
    }

    /// True when the given deployment model is supported.
    pub fn supports_deployment(&self, model: DeploymentModel) -> bool {
        self.deployment_models.contains(&model)
    }

    /// Renders the deployment model list for elimination reasons.
    pub fn deployment_labels(&self) -> Vec<&'static str> {
        self.deployment_models.iter().map(|d| d.as_str()).collect()
    }
}
