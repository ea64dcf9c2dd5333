// ABOUTME: In-memory reference store implementing every repository trait
// ABOUTME: Built once from a ReferenceData document, then shared read-only behind an Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tracing::{debug, warn};
use veganizer_core::errors::DatabaseError;
use veganizer_core::models::{
    AnimalImpactRecord, AnimalProductType, ClimateMetric, NutritionRecord, Recipe,
    SubstitutionRule, Supplement,
};
use veganizer_intelligence::{normalize, substitution_key, NormalizeMode};

use super::repositories::{
    AnimalImpactRepository, ClimateRepository, NutritionRepository, RecipeRepository,
    SubstitutionRepository, SupplementRepository,
};
use super::seed::ReferenceData;

/// Table held in insertion order with a normalized-key index, first key wins
#[derive(Debug, Clone)]
struct KeyedTable<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Clone> KeyedTable<T> {
    fn new(rows: Vec<T>, key: impl Fn(&T) -> String) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            let key = key(row);
            if !key.is_empty() {
                index.entry(key).or_insert(position);
            }
        }
        Self { rows, index }
    }

    fn get(&self, key: &str) -> Option<T> {
        self.index.get(key).map(|&position| self.rows[position].clone())
    }

    fn all(&self) -> Vec<T> {
        self.rows.clone()
    }
}

impl<T> Default for KeyedTable<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

fn name_key(name: &str) -> String {
    normalize(name, NormalizeMode::Key)
}

/// Reference store kept entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    recipes: KeyedTable<Recipe>,
    substitutions: KeyedTable<SubstitutionRule>,
    nutrition: KeyedTable<NutritionRecord>,
    climate: KeyedTable<ClimateMetric>,
    supplements: KeyedTable<Supplement>,
    animal_impacts: Vec<AnimalImpactRecord>,
}

impl InMemoryStore {
    /// Build the store from a reference data document
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateKey` if two substitution rules share a
    /// normalized original ingredient
    pub fn new(data: ReferenceData) -> Result<Self, DatabaseError> {
        let mut seen = HashSet::with_capacity(data.substitutions.len());
        for rule in &data.substitutions {
            let key = substitution_key(&rule.original_ingredient);
            if !seen.insert(key.clone()) {
                return Err(DatabaseError::DuplicateKey {
                    entity_type: "substitution_rule",
                    key,
                });
            }
        }

        let mut animal_impacts: Vec<AnimalImpactRecord> =
            Vec::with_capacity(data.animal_impacts.len());
        for record in data.animal_impacts {
            if animal_impacts
                .iter()
                .any(|existing| existing.product_type == record.product_type)
            {
                warn!(
                    product = record.product_type.as_str(),
                    "Ignoring duplicate animal impact record"
                );
                continue;
            }
            animal_impacts.push(record);
        }

        let store = Self {
            recipes: KeyedTable::new(data.recipes, |r| name_key(&r.name)),
            substitutions: KeyedTable::new(data.substitutions, |r| {
                substitution_key(&r.original_ingredient)
            }),
            nutrition: KeyedTable::new(data.nutrition, |r| name_key(&r.name)),
            climate: KeyedTable::new(data.climate, |m| name_key(&m.category)),
            supplements: KeyedTable::new(data.supplements, |s| name_key(&s.name)),
            animal_impacts,
        };
        debug!(
            recipes = store.recipes.rows.len(),
            substitutions = store.substitutions.rows.len(),
            nutrition = store.nutrition.rows.len(),
            "In-memory reference store ready"
        );
        Ok(store)
    }
}

#[async_trait]
impl RecipeRepository for InMemoryStore {
    async fn get_by_name(&self, name: &str) -> Result<Option<Recipe>, DatabaseError> {
        Ok(self.recipes.get(&name_key(name)))
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, DatabaseError> {
        Ok(self.recipes.all())
    }
}

#[async_trait]
impl SubstitutionRepository for InMemoryStore {
    async fn get_by_original(
        &self,
        original: &str,
    ) -> Result<Option<SubstitutionRule>, DatabaseError> {
        Ok(self.substitutions.get(&substitution_key(original)))
    }

    async fn list_all(&self) -> Result<Vec<SubstitutionRule>, DatabaseError> {
        Ok(self.substitutions.all())
    }
}

#[async_trait]
impl NutritionRepository for InMemoryStore {
    async fn get_by_name(&self, name: &str) -> Result<Option<NutritionRecord>, DatabaseError> {
        Ok(self.nutrition.get(&name_key(name)))
    }

    async fn list_all(&self) -> Result<Vec<NutritionRecord>, DatabaseError> {
        Ok(self.nutrition.all())
    }
}

#[async_trait]
impl ClimateRepository for InMemoryStore {
    async fn get_by_category(
        &self,
        category: &str,
    ) -> Result<Option<ClimateMetric>, DatabaseError> {
        Ok(self
            .climate
            .get(&name_key(category))
            .filter(|metric| metric.factors().is_some()))
    }

    async fn list_all(&self) -> Result<Vec<ClimateMetric>, DatabaseError> {
        Ok(self.climate.all())
    }
}

#[async_trait]
impl SupplementRepository for InMemoryStore {
    async fn get_by_name(&self, name: &str) -> Result<Option<Supplement>, DatabaseError> {
        Ok(self.supplements.get(&name_key(name)))
    }

    async fn list_all(&self) -> Result<Vec<Supplement>, DatabaseError> {
        Ok(self.supplements.all())
    }
}

#[async_trait]
impl AnimalImpactRepository for InMemoryStore {
    async fn get_by_product(
        &self,
        product: AnimalProductType,
    ) -> Result<Option<AnimalImpactRecord>, DatabaseError> {
        Ok(self
            .animal_impacts
            .iter()
            .find(|record| record.product_type == product)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<AnimalImpactRecord>, DatabaseError> {
        Ok(self.animal_impacts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookups_use_normalized_keys() {
        let store = InMemoryStore::new(ReferenceData::builtin()).unwrap();

        let recipe = RecipeRepository::get_by_name(&store, "BOEUF BOURGUIGNON")
            .await
            .unwrap();
        assert_eq!(recipe.unwrap().name, "Bœuf bourguignon");

        let rule = store.get_by_original("Crème Fraiche").await.unwrap();
        assert_eq!(rule.unwrap().vegan_substitute, "crème de soja");

        let metric = store.get_by_category("Beef").await.unwrap();
        assert!(metric.is_some());
    }

    #[tokio::test]
    async fn test_incomplete_metric_is_absent() {
        let data = ReferenceData {
            climate: vec![ClimateMetric {
                category: "beef".to_owned(),
                co2_kg_per_kg: Some(60.0),
                water_l_per_kg: None,
                land_m2_per_kg: Some(164.0),
                biodiversity_impact: Some(0.9),
            }],
            ..ReferenceData::default()
        };
        let store = InMemoryStore::new(data).unwrap();
        assert!(store.get_by_category("beef").await.unwrap().is_none());
        assert_eq!(ClimateRepository::list_all(&store).await.unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_substitution_is_rejected() {
        let data = ReferenceData {
            substitutions: vec![
                SubstitutionRule::new("Crème fraîche", "crème de soja"),
                SubstitutionRule::new("creme fraiche", "crème de coco"),
            ],
            ..ReferenceData::default()
        };
        let error = InMemoryStore::new(data).unwrap_err();
        assert!(matches!(error, DatabaseError::DuplicateKey { .. }));
    }
}
