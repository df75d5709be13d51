//! Heat-exchange, efficiency, and cooler load calculations

use std::collections::{BTreeMap, HashMap};

use crate::error::CalcError;
use crate::models::{Cooler, CoolerResult, FlowResult, HotFlow, Network, Report};

/// Specific heat capacity of cooling water, kJ/(kg·°C)
pub const WATER_SPECIFIC_HEAT: f64 = 4.186;

/// Heat transferred by a hot flow, kJ/h
///
/// Q = mcp * (T_in - T_out). Negative when the outlet is hotter than the
/// inlet; the value is passed through unchanged.
pub fn heat_exchange(flow: &HotFlow) -> f64 {
    flow.mcp * (flow.inlet_temp - flow.outlet_temp)
}

/// Efficiency percentage of a hot flow against one cooler
///
/// eta = 100 * (th1 - th2) / (th1 - tc1), the share of the available
/// temperature drop the flow actually achieves.
pub fn efficiency(flow: &HotFlow, cooler: &Cooler) -> Result<f64, CalcError> {
    let available_drop = flow.inlet_temp - cooler.in_temp;
    if available_drop == 0.0 {
        return Err(CalcError::EfficiencyDivisionByZero {
            flow: flow.name.clone(),
            cooler: cooler.name.clone(),
            temp: flow.inlet_temp,
        });
    }
    Ok(100.0 * (flow.inlet_temp - flow.outlet_temp) / available_drop)
}

/// Total heat load on one cooler and the water flow needed to absorb it
///
/// Each flow referencing the cooler contributes an even share of its heat
/// exchange, divided by the number of *referenced* cooler names. Names that
/// resolve to no cooler still count in the divisor, and a name listed twice
/// contributes its share once while inflating the divisor (membership test,
/// not per-reference accumulation).
pub fn cooler_result(cooler: &Cooler, flows: &[HotFlow]) -> Result<CoolerResult, CalcError> {
    let mut total_heat_load = 0.0;
    for flow in flows {
        if flow.coolers.iter().any(|name| name == &cooler.name) {
            total_heat_load += heat_exchange(flow) / flow.coolers.len() as f64;
        }
    }

    let water_temp_rise = cooler.out_temp - cooler.in_temp;
    if water_temp_rise == 0.0 {
        return Err(CalcError::WaterFlowDivisionByZero {
            cooler: cooler.name.clone(),
            temp: cooler.in_temp,
        });
    }

    Ok(CoolerResult {
        total_heat_load,
        water_flow_rate: total_heat_load / (WATER_SPECIFIC_HEAT * water_temp_rise),
    })
}

/// Run the full pipeline over a network and build the report
///
/// Validates the document, then computes per-flow heat exchange, per-pairing
/// efficiency, and per-cooler load in sequence. Pure: identical input yields
/// an identical report.
pub fn process(network: &Network) -> Result<Report, CalcError> {
    network.validate()?;

    let by_name: HashMap<&str, &Cooler> = network
        .coolers
        .iter()
        .map(|c| (c.name.as_str(), c))
        .collect();

    let mut hot_flows = BTreeMap::new();
    for flow in &network.hot_flows {
        let mut efficiencies = BTreeMap::new();
        for cooler_name in &flow.coolers {
            // A reference to a cooler that does not exist is skipped.
            if let Some(cooler) = by_name.get(cooler_name.as_str()) {
                efficiencies.insert(cooler_name.clone(), efficiency(flow, cooler)?);
            }
        }
        hot_flows.insert(
            flow.name.clone(),
            FlowResult {
                heat_exchange: heat_exchange(flow),
                efficiencies,
            },
        );
    }

    let mut coolers = BTreeMap::new();
    for cooler in &network.coolers {
        coolers.insert(cooler.name.clone(), cooler_result(cooler, &network.hot_flows)?);
    }

    Ok(Report { hot_flows, coolers })
}

/// Report rendered for a human reader
#[derive(Debug)]
pub struct ReportSummary {
    pub flow_count: usize,
    pub cooler_count: usize,
    pub flow_rows: Vec<(String, f64, Vec<(String, f64)>)>,
    pub cooler_rows: Vec<(String, f64, f64)>,
    pub total_heat_load: f64,
    pub total_water_flow: f64,
}

/// Flatten a report into display rows and network-wide totals
pub fn summarize(report: &Report) -> ReportSummary {
    let flow_rows: Vec<_> = report
        .hot_flows
        .iter()
        .map(|(name, result)| {
            let efficiencies: Vec<_> = result
                .efficiencies
                .iter()
                .map(|(cooler, eta)| (cooler.clone(), *eta))
                .collect();
            (name.clone(), result.heat_exchange, efficiencies)
        })
        .collect();

    let cooler_rows: Vec<_> = report
        .coolers
        .iter()
        .map(|(name, result)| (name.clone(), result.total_heat_load, result.water_flow_rate))
        .collect();

    let total_heat_load = cooler_rows.iter().map(|(_, load, _)| load).sum();
    let total_water_flow = cooler_rows.iter().map(|(_, _, rate)| rate).sum();

    ReportSummary {
        flow_count: flow_rows.len(),
        cooler_count: cooler_rows.len(),
        flow_rows,
        cooler_rows,
        total_heat_load,
        total_water_flow,
    }
}

impl std::fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Cooling Network Report ===")?;
        writeln!(f, "{} hot flows, {} coolers", self.flow_count, self.cooler_count)?;
        writeln!(f)?;

        writeln!(f, "Hot flows:")?;
        for (name, heat, efficiencies) in &self.flow_rows {
            writeln!(f, "  {:<20} {:>12.1} kJ/h", name, heat)?;
            for (cooler, eta) in efficiencies {
                writeln!(f, "    vs {:<15} {:>10.2} %", cooler, eta)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Coolers:")?;
        writeln!(
            f,
            "  {:<20} {:>14} {:>14}",
            "Cooler", "Load (kJ/h)", "Water (kg/h)"
        )?;
        for (name, load, rate) in &self.cooler_rows {
            writeln!(f, "  {:<20} {:>14.1} {:>14.1}", name, load, rate)?;
        }
        writeln!(f)?;

        writeln!(f, "Totals:")?;
        writeln!(f, "  Heat load:  {:.1} kJ/h", self.total_heat_load)?;
        writeln!(f, "  Water flow: {:.1} kg/h", self.total_water_flow)?;

        Ok(())
    }
}
