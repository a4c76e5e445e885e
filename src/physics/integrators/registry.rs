//! Registry pattern for integrator selection by name

use super::{ExplicitEuler, Integrator, Pefrl, RungeKuttaFourthOrder, VelocityVerlet};
use std::collections::HashMap;

/// Registry resolving integrator names and aliases to instances
///
/// Selection by name keeps the driver decoupled from concrete integrator
/// types and gives configuration files a stable vocabulary. Unknown names
/// are a hard error listing what is available.
pub struct IntegratorRegistry {
    aliases: HashMap<String, String>,
}

impl IntegratorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            aliases: HashMap::new(),
        };

        // Short aliases for convenience
        registry.add_alias("euler", "explicit_euler");
        registry.add_alias("verlet", "velocity_verlet");
        registry.add_alias("rk4", "runge_kutta_fourth_order");
        registry.add_alias("forest_ruth", "pefrl");

        registry
    }

    pub fn add_alias(&mut self, alias: &str, target: &str) {
        self.aliases.insert(alias.to_string(), target.to_string());
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Integrator>, String> {
        let resolved_name = self.aliases.get(name).map(|s| s.as_str()).unwrap_or(name);

        match resolved_name {
            "explicit_euler" => Ok(Box::new(ExplicitEuler)),
            "velocity_verlet" => Ok(Box::new(VelocityVerlet)),
            "runge_kutta_fourth_order" => Ok(Box::new(RungeKuttaFourthOrder::default())),
            "pefrl" => Ok(Box::new(Pefrl)),
            _ => {
                let available = self.list_available();
                let mut aliases: Vec<String> = self.aliases.keys().cloned().collect();
                aliases.sort();
                Err(format!(
                    "Unknown integrator: '{}'. Available integrators: {}. Aliases: {}",
                    name,
                    available.join(", "),
                    aliases.join(", ")
                ))
            }
        }
    }

    pub fn list_available(&self) -> Vec<String> {
        vec![
            "explicit_euler".to_string(),
            "velocity_verlet".to_string(),
            "runge_kutta_fourth_order".to_string(),
            "pefrl".to_string(),
        ]
    }

    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .aliases
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        aliases.sort_by(|a, b| a.0.cmp(&b.0));
        aliases
    }
}

impl Default for IntegratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
