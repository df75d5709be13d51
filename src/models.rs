//! Data models for cooling networks: hot flows, coolers, and the report

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// A hot process stream being cooled
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotFlow {
    pub name: String,
    /// Heat-capacity rate (mass flow x specific heat), kJ/°C·h
    pub mcp: f64,
    pub inlet_temp: f64,  // °C
    pub outlet_temp: f64, // °C
    /// Names of the coolers this flow rejects heat into
    pub coolers: Vec<String>,
}

/// A heat-removal unit fed by cooling water
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cooler {
    pub name: String,
    pub in_temp: f64,  // °C
    pub out_temp: f64, // °C
}

/// The full input document. Unknown fields are ignored; network editors
/// attach layout data (`coolFlows`, per-cooler `position`) the calculator
/// has no use for.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub hot_flows: Vec<HotFlow>,
    pub coolers: Vec<Cooler>,
}

/// Computed figures for one hot flow
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowResult {
    /// Heat transferred by the flow, kJ/h
    pub heat_exchange: f64,
    /// Efficiency percentage per referenced cooler; entries exist only for
    /// coolers present in the cooler set
    pub efficiencies: BTreeMap<String, f64>,
}

/// Computed figures for one cooler
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoolerResult {
    /// Sum of the load shares of every flow referencing this cooler, kJ/h
    pub total_heat_load: f64,
    /// Cooling water required to absorb the load, kg/h
    pub water_flow_rate: f64,
}

/// The output document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub hot_flows: BTreeMap<String, FlowResult>,
    pub coolers: BTreeMap<String, CoolerResult>,
}

impl Network {
    /// Check the document before any computation runs.
    ///
    /// Catches duplicate names and non-finite numbers so they surface as
    /// input errors rather than as arithmetic surprises downstream.
    pub fn validate(&self) -> Result<(), CalcError> {
        let mut seen = std::collections::HashSet::new();
        for flow in &self.hot_flows {
            if !seen.insert(&flow.name) {
                return Err(CalcError::malformed(format!(
                    "duplicate hot flow name '{}'",
                    flow.name
                )));
            }
            for (label, value) in [
                ("mcp", flow.mcp),
                ("inletTemp", flow.inlet_temp),
                ("outletTemp", flow.outlet_temp),
            ] {
                if !value.is_finite() {
                    return Err(CalcError::malformed(format!(
                        "hot flow '{}' has non-finite {}: {}",
                        flow.name, label, value
                    )));
                }
            }
        }

        let mut seen = std::collections::HashSet::new();
        for cooler in &self.coolers {
            if !seen.insert(&cooler.name) {
                return Err(CalcError::malformed(format!(
                    "duplicate cooler name '{}'",
                    cooler.name
                )));
            }
            for (label, value) in [("inTemp", cooler.in_temp), ("outTemp", cooler.out_temp)] {
                if !value.is_finite() {
                    return Err(CalcError::malformed(format!(
                        "cooler '{}' has non-finite {}: {}",
                        cooler.name, label, value
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(name: &str, mcp: f64) -> HotFlow {
        HotFlow {
            name: name.to_string(),
            mcp,
            inlet_temp: 80.0,
            outlet_temp: 40.0,
            coolers: vec!["C1".to_string()],
        }
    }

    #[test]
    fn parses_camel_case_input() {
        let json = r#"{
            "hotFlows": [
                { "name": "H1", "mcp": 100, "inletTemp": 80, "outletTemp": 40, "coolers": ["C1"] }
            ],
            "coolers": [
                { "name": "C1", "inTemp": 20, "outTemp": 30 }
            ]
        }"#;

        let network: Network = serde_json::from_str(json).unwrap();
        assert_eq!(network.hot_flows[0].name, "H1");
        assert_eq!(network.hot_flows[0].inlet_temp, 80.0);
        assert_eq!(network.coolers[0].out_temp, 30.0);
    }

    #[test]
    fn ignores_gui_only_fields() {
        // Documents exported from the network editor carry extra data.
        let json = r#"{
            "hotFlows": [
                { "name": "H1", "mcp": 100, "inletTemp": 80, "outletTemp": 40,
                  "coolers": ["C1"], "heatCapacity": 2.1, "flowRate": 47.6 }
            ],
            "coolers": [
                { "name": "C1", "inTemp": 20, "outTemp": 30,
                  "position": { "x": 1, "y": 2, "z": 0 } }
            ],
            "coolFlows": [
                { "name": "W1", "sources": ["tower"], "path": [], "destinations": ["C1"] }
            ]
        }"#;

        let network: Network = serde_json::from_str(json).unwrap();
        assert_eq!(network.hot_flows.len(), 1);
        assert_eq!(network.coolers.len(), 1);
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let json = r#"{ "hotFlows": [ { "name": "H1", "mcp": 100 } ], "coolers": [] }"#;
        assert!(serde_json::from_str::<Network>(json).is_err());
    }

    #[test]
    fn validate_rejects_duplicate_flow_names() {
        let network = Network {
            hot_flows: vec![flow("H1", 100.0), flow("H1", 50.0)],
            coolers: vec![],
        };
        let err = network.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate hot flow name 'H1'"));
    }

    #[test]
    fn validate_rejects_non_finite_numbers() {
        let network = Network {
            hot_flows: vec![flow("H1", f64::NAN)],
            coolers: vec![],
        };
        let err = network.validate().unwrap_err();
        assert!(err.to_string().contains("non-finite mcp"));
    }

    #[test]
    fn validate_accepts_duplicate_cooler_references() {
        // A flow may list the same cooler twice; only cooler *definitions*
        // must be unique.
        let mut f = flow("H1", 100.0);
        f.coolers = vec!["C1".to_string(), "C1".to_string()];
        let network = Network {
            hot_flows: vec![f],
            coolers: vec![Cooler {
                name: "C1".to_string(),
                in_temp: 20.0,
                out_temp: 30.0,
            }],
        };
        assert!(network.validate().is_ok());
    }
}
