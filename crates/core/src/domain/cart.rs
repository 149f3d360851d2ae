use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductId};
use crate::errors::DomainError;
use crate::matching::token_overlap_score;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub cart: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Increments every line with the product's id, or appends a new line.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }

        let mut found = false;
        for line in self.lines.iter_mut().filter(|line| line.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            found = true;
        }

        if !found {
            self.lines.push(CartLine {
                id: product.id.clone(),
                title: product.title.clone(),
                price: product.price,
                quantity,
            });
        }

        Ok(())
    }

    /// Decrements or deletes the first line whose title shares a token with
    /// `query`. Returns the affected title.
    pub fn remove(&mut self, query: &str, quantity: u32) -> Result<Option<String>, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }

        let Some(index) =
            self.lines.iter().position(|line| token_overlap_score(&line.title, query) > 0)
        else {
            return Ok(None);
        };

        let line = &mut self.lines[index];
        if line.quantity > quantity {
            line.quantity -= quantity;
            return Ok(Some(line.title.clone()));
        }

        let removed = self.lines.remove(index);
        Ok(Some(removed.title))
    }

    pub fn checkout(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum::<Decimal>().round_dp(2)
    }

    pub fn snapshot(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn view(&self) -> CartView {
        CartView { cart: self.lines.clone(), total: self.total() }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
