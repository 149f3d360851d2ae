use std::sync::Arc;

use serde_json::json;
use voicecart_agent::runtime::AssistantRuntime;
use voicecart_core::catalog::JsonFileCatalog;
use voicecart_core::config::{AppConfig, LoadOptions};
use voicecart_core::ApplicationError;

use crate::commands::{
    block_on, CommandResult, EXIT_CATALOG_FAILURE, EXIT_CONFIG_FAILURE, EXIT_UTTERANCE_FAILURE,
};

/// Runs each utterance in order against one fresh cart.
pub fn run(utterances: &[String]) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "say",
                "config_validation",
                error.to_string(),
                EXIT_CONFIG_FAILURE,
            )
        }
    };

    if utterances.is_empty() {
        return CommandResult::failure(
            "say",
            "utterance_failed",
            "at least one utterance is required",
            EXIT_UTTERANCE_FAILURE,
        );
    }

    let catalog = Arc::new(JsonFileCatalog::new(&config.catalog.path));
    let runtime = match AssistantRuntime::new(catalog) {
        Ok(runtime) => runtime.with_suggestion_limit(config.assistant.suggestion_limit),
        Err(error) => {
            return CommandResult::failure(
                "say",
                "intent_rules",
                error.to_string(),
                EXIT_UTTERANCE_FAILURE,
            )
        }
    };

    let result = block_on(async {
        let mut outcomes = Vec::with_capacity(utterances.len());
        for (index, utterance) in utterances.iter().enumerate() {
            let correlation_id = format!("cli-{}", index + 1);
            let outcome = runtime
                .process_utterance(utterance, &correlation_id)
                .await
                .map_err(|error| (utterance.clone(), error))?;
            outcomes.push(outcome);
        }
        Ok::<_, (String, ApplicationError)>((outcomes, runtime.cart_view().await))
    });

    match result {
        Ok(Ok((outcomes, cart))) => CommandResult::success_with_data(
            "say",
            format!("processed {} utterances", outcomes.len()),
            Some(json!({ "outcomes": outcomes, "cart": cart })),
        ),
        Ok(Err((utterance, ApplicationError::Catalog(error)))) => CommandResult::failure(
            "say",
            "catalog_unavailable",
            format!("`{utterance}`: {error}"),
            EXIT_CATALOG_FAILURE,
        ),
        Ok(Err((utterance, error))) => CommandResult::failure(
            "say",
            "utterance_failed",
            format!("`{utterance}`: {error}"),
            EXIT_UTTERANCE_FAILURE,
        ),
        Err(error) => CommandResult::failure(
            "say",
            "runtime_init",
            format!("failed to initialize async runtime: {error}"),
            EXIT_UTTERANCE_FAILURE,
        ),
    }
}
