//! Capability registry - canonical capability names mapped to typed
//! accessors over [`Capabilities`].
//!
//! Filtering and scoring address capabilities by name (caller-supplied
//! strings). The registry makes that lookup explicit: a known name yields a
//! typed [`CapabilityValue`], an unknown name yields `None`. No reflection,
//! no sentinel values.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use super::Capabilities;

/// A capability value extracted from a vendor record.
///
/// `Number` values exist for completeness (published latency/concurrency
/// figures); the scoring policy awards them zero points.
#[derive(Debug, Clone, PartialEq)]
pub enum CapabilityValue {
    Bool(bool),
    Text(String),
    TextList(Vec<String>),
    Number(u32),
}

type Accessor = fn(&Capabilities) -> Option<CapabilityValue>;

static REGISTRY: Lazy<BTreeMap<&'static str, Accessor>> = Lazy::new(|| {
    let mut table: BTreeMap<&'static str, Accessor> = BTreeMap::new();

    // Booleans
    table.insert("sql_interface", |c| Some(CapabilityValue::Bool(c.sql_interface)));
    table.insert("streaming_query", |c| Some(CapabilityValue::Bool(c.streaming_query)));
    table.insert("multi_engine_query", |c| {
        Some(CapabilityValue::Bool(c.multi_engine_query))
    });
    table.insert("schema_evolution", |c| Some(CapabilityValue::Bool(c.schema_evolution)));
    table.insert("iceberg_support", |c| Some(CapabilityValue::Bool(c.iceberg_support)));
    table.insert("delta_lake_support", |c| {
        Some(CapabilityValue::Bool(c.delta_lake_support))
    });
    table.insert("cloud_native", |c| Some(CapabilityValue::Bool(c.cloud_native)));
    table.insert("multi_cloud", |c| Some(CapabilityValue::Bool(c.multi_cloud)));
    table.insert("managed_service_available", |c| {
        Some(CapabilityValue::Bool(c.managed_service_available))
    });
    table.insert("siem_integration", |c| Some(CapabilityValue::Bool(c.siem_integration)));
    table.insert("data_governance", |c| Some(CapabilityValue::Bool(c.data_governance)));
    table.insert("ocsf_support", |c| Some(CapabilityValue::Bool(c.ocsf_support)));
    table.insert("ml_analytics", |c| Some(CapabilityValue::Bool(c.ml_analytics)));
    table.insert("api_extensibility", |c| {
        Some(CapabilityValue::Bool(c.api_extensibility))
    });

    // Strings (enums surface their wire label; scoring treats non-empty
    // strings as a match, with open_table_format special-cased)
    table.insert("open_table_format", |c| {
        Some(CapabilityValue::Text(c.open_table_format.as_str().to_string()))
    });
    table.insert("operational_complexity", |c| {
        Some(CapabilityValue::Text(c.operational_complexity.as_str().to_string()))
    });
    table.insert("team_size_required", |c| {
        Some(CapabilityValue::Text(c.team_size_required.as_str().to_string()))
    });
    table.insert("cost_model", |c| {
        Some(CapabilityValue::Text(c.cost_model.as_str().to_string()))
    });
    table.insert("cost_predictability", |c| {
        Some(CapabilityValue::Text(c.cost_predictability.as_str().to_string()))
    });
    table.insert("maturity", |c| {
        Some(CapabilityValue::Text(c.maturity.as_str().to_string()))
    });
    table.insert("community_size", |c| {
        Some(CapabilityValue::Text(c.community_size.clone()))
    });
    table.insert("vendor_support", |c| {
        c.vendor_support
            .as_ref()
            .map(|tier| CapabilityValue::Text(tier.clone()))
    });

    // Lists
    table.insert("deployment_models", |c| {
        Some(CapabilityValue::TextList(
            c.deployment_models.iter().map(|d| d.as_str().to_string()).collect(),
        ))
    });
    table.insert("compliance_certifications", |c| {
        Some(CapabilityValue::TextList(c.compliance_certifications.clone()))
    });

    // Numerics
    table.insert("query_latency_p95", |c| {
        c.query_latency_p95.map(CapabilityValue::Number)
    });
    table.insert("query_concurrency", |c| {
        c.query_concurrency.map(CapabilityValue::Number)
    });

    table
});

/// Extracts the named capability from a record.
///
/// Returns `None` for unknown capability names and for optional capabilities
/// the vendor does not declare (e.g. `vendor_support`). Callers decide what
/// absence means: scoring records zero points, the requirements filter
/// treats it as a mismatch.
pub fn capability_value(capabilities: &Capabilities, name: &str) -> Option<CapabilityValue> {
    REGISTRY.get(name).and_then(|accessor| accessor(capabilities))
}

/// True when the name is a registered capability.
pub fn is_known_capability(name: &str) -> bool {
    REGISTRY.contains_key(name)
}
