use serde::Serialize;
use voicecart_agent::intent::{IntentClassifier, BUILTIN_RULES};
use voicecart_core::catalog::{CatalogSource, JsonFileCatalog};
use voicecart_core::config::{AppConfig, LoadOptions};

use crate::commands::block_on;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\
                 \"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = vec![];

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            Some(config)
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            None
        }
    };

    checks.push(check_intent_rules());

    match config {
        Some(config) => checks.push(check_catalog_readability(&config)),
        None => checks.push(DoctorCheck {
            name: "catalog_readability",
            status: CheckStatus::Skipped,
            details: "skipped because configuration did not load".to_string(),
        }),
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_intent_rules() -> DoctorCheck {
    match IntentClassifier::builtin() {
        Ok(_) => DoctorCheck {
            name: "intent_rules",
            status: CheckStatus::Pass,
            details: format!("{} intent rule groups compiled", BUILTIN_RULES.len()),
        },
        Err(error) => DoctorCheck {
            name: "intent_rules",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_catalog_readability(config: &AppConfig) -> DoctorCheck {
    let catalog = JsonFileCatalog::new(&config.catalog.path);
    let result = match block_on(catalog.load()) {
        Ok(result) => result,
        Err(error) => {
            return DoctorCheck {
                name: "catalog_readability",
                status: CheckStatus::Fail,
                details: format!("failed to initialize async runtime: {error}"),
            };
        }
    };

    match result {
        Ok(products) => DoctorCheck {
            name: "catalog_readability",
            status: CheckStatus::Pass,
            details: format!(
                "loaded {} products from `{}`",
                products.len(),
                catalog.path().display()
            ),
        },
        Err(error) => DoctorCheck {
            name: "catalog_readability",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
