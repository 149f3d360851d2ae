use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};
use voicecart_core::matching::{best_match, suggest_titles, DEFAULT_SUGGESTION_LIMIT};
use voicecart_core::{ApplicationError, Cart, CartLine, CartView, CatalogSource, Product};

use crate::extract::{ItemExtractor, QuantityExtractor};
use crate::intent::{Intent, IntentClassifier};
use crate::AgentError;

pub const CHECKOUT_MESSAGE: &str = "✅ Checkout successful! Your cart is now empty.";
pub const NO_TEXT_MESSAGE: &str = "No text";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParsedUtterance {
    pub intent: Intent,
    pub item: String,
    pub quantity: u32,
}

/// Response payload for one utterance. `qty` is omitted on an unmatched add.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum VoiceOutcome {
    Add {
        added: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        qty: Option<u32>,
        cart: Vec<CartLine>,
    },
    Remove {
        removed: Option<String>,
        qty: u32,
        cart: Vec<CartLine>,
    },
    Checkout {
        message: String,
    },
    Find {
        suggestions: Vec<String>,
    },
}

impl VoiceOutcome {
    pub fn intent(&self) -> Intent {
        match self {
            Self::Add { .. } => Intent::Add,
            Self::Remove { .. } => Intent::Remove,
            Self::Checkout { .. } => Intent::Checkout,
            Self::Find { .. } => Intent::Find,
        }
    }
}

/// Session state for one assistant: the catalog it reads from and the single
/// cart every request mutates.
pub struct AssistantRuntime {
    catalog: Arc<dyn CatalogSource>,
    classifier: IntentClassifier,
    items: ItemExtractor,
    quantities: QuantityExtractor,
    cart: Mutex<Cart>,
    suggestion_limit: usize,
}

impl AssistantRuntime {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Result<Self, AgentError> {
        Ok(Self {
            catalog,
            classifier: IntentClassifier::builtin()?,
            items: ItemExtractor::default(),
            quantities: QuantityExtractor::new()?,
            cart: Mutex::new(Cart::new()),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        })
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn with_classifier(mut self, classifier: IntentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_item_extractor(mut self, items: ItemExtractor) -> Self {
        self.items = items;
        self
    }

    pub fn parse(&self, text: &str) -> ParsedUtterance {
        ParsedUtterance {
            intent: self.classifier.classify(text),
            item: self.items.extract(text),
            quantity: self.quantities.extract(text),
        }
    }

    pub async fn process_utterance(
        &self,
        text: &str,
        correlation_id: &str,
    ) -> Result<VoiceOutcome, ApplicationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApplicationError::InvalidInput(NO_TEXT_MESSAGE.to_string()));
        }

        let parsed = self.parse(text);
        info!(
            event_name = "assistant.utterance.parsed",
            correlation_id,
            intent = parsed.intent.as_str(),
            item = %parsed.item,
            quantity = parsed.quantity,
            "utterance parsed"
        );

        let products = self.catalog.load().await.map_err(|error| {
            warn!(
                event_name = "assistant.catalog.load_failed",
                correlation_id,
                error = %error,
                "catalog could not be loaded"
            );
            ApplicationError::from(error)
        })?;

        let outcome = match parsed.intent {
            Intent::Add => self.add(&products, &parsed).await?,
            Intent::Remove => self.remove(&parsed).await?,
            Intent::Checkout => {
                self.cart.lock().await.checkout();
                VoiceOutcome::Checkout { message: CHECKOUT_MESSAGE.to_string() }
            }
            Intent::Find => VoiceOutcome::Find {
                suggestions: suggest_titles(&products, &parsed.item, self.suggestion_limit),
            },
        };

        info!(
            event_name = "assistant.utterance.handled",
            correlation_id,
            intent = outcome.intent().as_str(),
            matched = outcome_matched(&outcome),
            "utterance handled"
        );
        Ok(outcome)
    }

    pub async fn products(&self) -> Result<Vec<Product>, ApplicationError> {
        Ok(self.catalog.load().await?)
    }

    pub async fn cart_view(&self) -> CartView {
        self.cart.lock().await.view()
    }

    async fn add(
        &self,
        products: &[Product],
        parsed: &ParsedUtterance,
    ) -> Result<VoiceOutcome, ApplicationError> {
        let mut cart = self.cart.lock().await;
        let Some(product) = best_match(products, &parsed.item) else {
            return Ok(VoiceOutcome::Add { added: None, qty: None, cart: cart.snapshot().to_vec() });
        };

        cart.add(product, parsed.quantity)?;
        Ok(VoiceOutcome::Add {
            added: Some(product.title.clone()),
            qty: Some(parsed.quantity),
            cart: cart.snapshot().to_vec(),
        })
    }

    async fn remove(&self, parsed: &ParsedUtterance) -> Result<VoiceOutcome, ApplicationError> {
        let mut cart = self.cart.lock().await;
        let removed = cart.remove(&parsed.item, parsed.quantity)?;
        Ok(VoiceOutcome::Remove { removed, qty: parsed.quantity, cart: cart.snapshot().to_vec() })
    }
}

fn outcome_matched(outcome: &VoiceOutcome) -> bool {
    match outcome {
        VoiceOutcome::Add { added, .. } => added.is_some(),
        VoiceOutcome::Remove { removed, .. } => removed.is_some(),
        VoiceOutcome::Checkout { .. } => true,
        VoiceOutcome::Find { suggestions } => !suggestions.is_empty(),
    }
}
