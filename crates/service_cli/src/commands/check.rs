//! Check command implementation
//!
//! Prints the resolved configuration and the available methods.

use curvefit_core::math::interpolators::InterpolatorKind;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{print_json, OutputFormat, Table};
use crate::{CliError, Result};

#[derive(Debug, Serialize)]
struct MethodInfo {
    name: &'static str,
    min_points: usize,
    description: &'static str,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    version: &'static str,
    parallel: bool,
    methods: Vec<MethodInfo>,
    config: &'a CliConfig,
}

fn methods() -> Vec<MethodInfo> {
    InterpolatorKind::ALL
        .iter()
        .map(|kind| MethodInfo {
            name: kind.as_str(),
            min_points: kind.min_points(),
            description: kind.build().description(),
        })
        .collect()
}

/// Run the check command
pub fn run(config: &CliConfig, format: OutputFormat) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    let report = CheckReport {
        version: env!("CARGO_PKG_VERSION"),
        parallel: config.denoise.parallel,
        methods: methods(),
        config,
    };

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Table => {
            let mut table = Table::new(["Method", "Min points", "Description"]);
            for method in &report.methods {
                table.row([
                    method.name.to_string(),
                    method.min_points.to_string(),
                    method.description.to_string(),
                ]);
            }
            println!("curvefit {}", report.version);
            table.print();
            let resolved = toml::to_string_pretty(config)
                .map_err(|e| CliError::invalid_argument(format!("cannot render config: {}", e)))?;
            println!("\n# Resolved configuration\n{}", resolved);
            info!("Configuration OK");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_default_config() {
        assert!(run(&CliConfig::default(), OutputFormat::Table).is_ok());
        assert!(run(&CliConfig::default(), OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_methods_carry_descriptions() {
        let methods = methods();
        assert_eq!(methods.len(), InterpolatorKind::ALL.len());
        for (info, kind) in methods.iter().zip(InterpolatorKind::ALL) {
            assert_eq!(info.name, kind.as_str());
            assert_eq!(info.min_points, kind.min_points());
            assert!(!info.description.is_empty());
        }
        let distinct: std::collections::HashSet<_> =
            methods.iter().map(|m| m.description).collect();
        assert_eq!(distinct.len(), methods.len());
    }

    #[test]
    fn test_check_reports_invalid_config() {
        let mut config = CliConfig::default();
        config.denoise.window = 0;
        assert!(matches!(
            run(&config, OutputFormat::Table),
            Err(CliError::Config(_))
        ));
    }
}
