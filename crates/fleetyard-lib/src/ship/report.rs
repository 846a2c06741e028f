//! Read-only ship summaries for display and serialisation.

use std::fmt;

use serde::Serialize;

use crate::container::ContainerKind;

/// One line of a ship's manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerSummary {
    pub serial_number: String,
    pub kind: ContainerKind,
    pub total_weight_kg: f64,
}

/// Snapshot of a ship's limits and current manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipReport {
    pub name: String,
    pub max_speed_knots: f64,
    pub max_container_count: usize,
    pub max_weight_tons: f64,
    pub container_count: usize,
    pub total_weight_kg: f64,
    pub containers: Vec<ContainerSummary>,
}

impl fmt::Display for ShipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.name)?;
        writeln!(f, "Max speed (kn): {}", self.max_speed_knots)?;
        writeln!(f, "Max containers: {}", self.max_container_count)?;
        writeln!(f, "Max weight (t): {}", self.max_weight_tons)?;
        writeln!(f, "Containers aboard: {}", self.container_count)?;
        write!(f, "Current weight (kg): {}", self.total_weight_kg)?;
        for container in &self.containers {
            write!(
                f,
                "\n- {} | {} kg",
                container.serial_number, container.total_weight_kg
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShipReport {
        ShipReport {
            name: "Pacific Runner".to_string(),
            max_speed_knots: 20.0,
            max_container_count: 5,
            max_weight_tons: 20.0,
            container_count: 1,
            total_weight_kg: 550.0,
            containers: vec![ContainerSummary {
                serial_number: "CON-G-3".to_string(),
                kind: ContainerKind::Gas,
                total_weight_kg: 550.0,
            }],
        }
    }

    #[test]
    fn text_dump_lists_limits_and_manifest() {
        let text = sample().to_string();
        assert_eq!(
            text,
            "=== Pacific Runner ===\n\
             Max speed (kn): 20\n\
             Max containers: 5\n\
             Max weight (t): 20\n\
             Containers aboard: 1\n\
             Current weight (kg): 550\n\
             - CON-G-3 | 550 kg"
        );
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["containers"][0]["kind"], "gas");
        assert_eq!(json["container_count"], 1);
    }
}
