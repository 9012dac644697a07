//! Shared vendor fixtures for domain tests.

use chrono::Utc;

use super::catalog::{
    Capabilities, CostModel, DeploymentModel, Maturity, OpenTableFormat, Vendor, VendorCategory,
};
use super::foundation::{Level, TeamSize};

/// Baseline capabilities: a lean-team, cloud-native, consumption-priced
/// query engine with native Iceberg support. Tests override fields as needed.
pub(crate) fn capabilities_fixture() -> Capabilities {
    Capabilities {
        sql_interface: true,
        streaming_query: false,
        multi_engine_query: false,
        open_table_format: OpenTableFormat::new("iceberg-native"),
        schema_evolution: true,
        iceberg_support: true,
        delta_lake_support: false,
        deployment_models: vec![DeploymentModel::Cloud],
        cloud_native: true,
        multi_cloud: false,
        operational_complexity: Level::Low,
        managed_service_available: true,
        team_size_required: TeamSize::Lean,
        cost_model: CostModel::Consumption,
        cost_predictability: Level::Medium,
        siem_integration: false,
        compliance_certifications: vec!["SOC2".to_string()],
        data_governance: false,
        maturity: Maturity::Production,
        vendor_support: None,
        community_size: "unknown".to_string(),
        ocsf_support: false,
        ml_analytics: false,
        api_extensibility: true,
        query_latency_p95: None,
        query_concurrency: None,
    }
}

/// A complete vendor record built around [`capabilities_fixture`].
pub(crate) fn vendor_fixture(id: &str) -> Vendor {
    Vendor {
        id: id.to_string(),
        name: id
            .split('-')
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        category: VendorCategory::QueryEngine,
        description: "Test vendor".to_string(),
        website: None,
        capabilities: capabilities_fixture(),
        typical_annual_cost_range: Some("$50K-200K/year".to_string()),
        cost_notes: None,
        evidence_source: "test".to_string(),
        last_updated: Utc::now(),
        validated_by: None,
        tags: Vec::new(),
    }
}
