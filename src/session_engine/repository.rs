use rand::Rng;

use crate::session_engine::error::EngineError;
use crate::session_engine::generator;
use crate::session_engine::models::{
    BuggyCircuit, ComponentSymbol, ItemId, PowerPuzzle, QuizQuestion,
};

/// A quizzable unit with a stable identifier.
pub trait ContentItem {
    fn item_id(&self) -> ItemId;
}

impl ContentItem for ComponentSymbol {
    fn item_id(&self) -> ItemId {
        self.id
    }
}

impl ContentItem for QuizQuestion {
    fn item_id(&self) -> ItemId {
        self.id
    }
}

impl ContentItem for BuggyCircuit {
    fn item_id(&self) -> ItemId {
        self.id
    }
}

impl ContentItem for PowerPuzzle {
    fn item_id(&self) -> ItemId {
        self.id
    }
}

/// Read-only view over a compiled-in content table. Shared by every session;
/// never mutated.
pub struct Repository<T: ContentItem + 'static> {
    items: &'static [T],
}

impl<T: ContentItem + 'static> Repository<T> {
    pub fn new(items: &'static [T]) -> Self {
        Repository { items }
    }

    pub fn all(&self) -> &'static [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw exactly `n` items uniformly at random, without replacement,
    /// skipping any whose id appears in `excluding`.
    pub fn sample<R: Rng>(
        &self,
        rng: &mut R,
        n: usize,
        excluding: &[ItemId],
    ) -> Result<Vec<&'static T>, EngineError> {
        let mut eligible: Vec<&'static T> = self
            .items
            .iter()
            .filter(|item| !excluding.contains(&item.item_id()))
            .collect();

        if eligible.len() < n {
            return Err(EngineError::InsufficientPool {
                needed: n,
                available: eligible.len(),
            });
        }

        generator::shuffle(rng, &mut eligible);
        eligible.truncate(n);
        Ok(eligible)
    }
}
