//! Static Car Catalog
//!
//! Showcase data for the public `/cars` and `/car-info` pages. This is
//! a fixed lookup table, not listing inventory.

use axum::Json;
use serde::Serialize;
use serde_json::json;

/// Car spec sheet entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSpec {
    pub model_name: &'static str,
    pub brand: &'static str,
    pub engine: &'static str,
    pub horsepower: &'static str,
    pub torque: &'static str,
}

const CATALOG: &[CarSpec] = &[
    CarSpec {
        model_name: "Dodge Challenger Hellcat",
        brand: "Dodge",
        engine: "6.2L Supercharged HEMI V8",
        horsepower: "717 hp",
        torque: "656 lb-ft",
    },
    CarSpec {
        model_name: "Dodge Challenger Demon",
        brand: "Dodge",
        engine: "6.2L Supercharged HEMI V8",
        horsepower: "808 hp",
        torque: "717 lb-ft",
    },
    CarSpec {
        model_name: "Ford Mustang Shelby GT500",
        brand: "Ford",
        engine: "5.2L Supercharged V8",
        horsepower: "760 hp",
        torque: "625 lb-ft",
    },
];

/// Look up a spec by model name (case-insensitive prefix match, so
/// "Ford Mustang Shelby" finds the GT500)
pub fn find_spec(model: &str) -> Option<&'static CarSpec> {
    let needle = model.trim().to_lowercase();
    CATALOG
        .iter()
        .find(|spec| spec.model_name.to_lowercase().starts_with(&needle))
}

/// GET /cars
///
/// The showcased models; unknown names are silently skipped.
pub async fn cars() -> Json<serde_json::Value> {
    let models = [
        "Dodge Challenger Hellcat",
        "Dodge Challenger Demon",
        "Ford Mustang Shelby",
    ];
    let found: Vec<&CarSpec> = models.iter().filter_map(|m| find_spec(m)).collect();
    Json(json!({ "cars": found }))
}

/// GET /car-info
///
/// The full spec table.
pub async fn car_info() -> Json<serde_json::Value> {
    Json(json!({ "cars": CATALOG }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_spec_exact() {
        let spec = find_spec("Dodge Challenger Demon").unwrap();
        assert_eq!(spec.horsepower, "808 hp");
    }

    #[test]
    fn test_find_spec_prefix_and_case() {
        let spec = find_spec("ford mustang shelby").unwrap();
        assert_eq!(spec.model_name, "Ford Mustang Shelby GT500");
    }

    #[test]
    fn test_find_spec_unknown() {
        assert!(find_spec("Lada Niva").is_none());
    }

    #[test]
    fn test_spec_serializes_camel_case() {
        let json = serde_json::to_string(&CATALOG[0]).unwrap();
        assert!(json.contains("modelName"));
        assert!(json.contains("horsepower"));
    }
}
