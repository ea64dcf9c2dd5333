// ABOUTME: Reference data document used to seed the in-memory and SQLite stores
// ABOUTME: JSON loading plus a built-in dataset of French recipes, rules and impact factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reference Data
//!
//! A `ReferenceData` document holds every table the pipeline reads. It is
//! deserialized from JSON (`--data` / `VEGANIZER_DATA_PATH`) or taken from the
//! built-in dataset, which covers the common French dishes and products the
//! keyword tables know about.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use veganizer_core::constants::supplements::{B12, CALCIUM, IRON, OMEGA_3, PROTEIN, ZINC};
use veganizer_core::errors::{AppError, AppResult};
use veganizer_core::models::{
    AnimalImpactRecord, AnimalProductType, AnimalType, ClimateFactors, ClimateMetric,
    NutritionRecord, Recipe, RecipeSlot, SubstitutionRule, Supplement, SupplementKind,
    SupplementPriority,
};

/// Every reference table, as loaded into a store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Stored recipes
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Substitution rules
    #[serde(default)]
    pub substitutions: Vec<SubstitutionRule>,
    /// Nutrition records, in lookup priority order
    #[serde(default)]
    pub nutrition: Vec<NutritionRecord>,
    /// Per-category climate metrics
    #[serde(default)]
    pub climate: Vec<ClimateMetric>,
    /// Supplement catalog
    #[serde(default)]
    pub supplements: Vec<Supplement>,
    /// Animal impact records
    #[serde(default)]
    pub animal_impacts: Vec<AnimalImpactRecord>,
}

impl ReferenceData {
    /// Parse a JSON document
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the document is not valid reference data
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON document from disk
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read, or a
    /// serialization error if it is not valid reference data
    pub async fn load(path: &Path) -> AppResult<Self> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::config(format!(
                "Failed to read reference data {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;
        let data = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            records = data.record_count(),
            "Loaded reference data"
        );
        Ok(data)
    }

    /// Total number of records over all tables
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.recipes.len()
            + self.substitutions.len()
            + self.nutrition.len()
            + self.climate.len()
            + self.supplements.len()
            + self.animal_impacts.len()
    }

    /// Built-in dataset
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            recipes: builtin_recipes(),
            substitutions: builtin_substitutions(),
            nutrition: builtin_nutrition(),
            climate: builtin_climate(),
            supplements: builtin_supplements(),
            animal_impacts: builtin_animal_impacts(),
        }
    }
}

fn recipe(
    name: &str,
    slots: Vec<RecipeSlot>,
    vegan_name: Option<&str>,
    cooking_time: Option<&str>,
    servings: Option<u32>,
    difficulty: Option<&str>,
) -> Recipe {
    let mut recipe = Recipe::new(name, slots);
    recipe.vegan_name = vegan_name.map(str::to_owned);
    recipe.cooking_time = cooking_time.map(str::to_owned);
    recipe.servings = servings;
    recipe.difficulty = difficulty.map(str::to_owned);
    recipe
}

fn builtin_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "Bœuf bourguignon",
            vec![
                RecipeSlot::with_vegan("bœuf", "seitan"),
                RecipeSlot::with_vegan("lardons", "tofu fumé"),
                RecipeSlot::with_vegan("vin rouge", "vin rouge").already_vegan(),
                RecipeSlot::original("carottes"),
                RecipeSlot::original("champignons"),
                RecipeSlot::original("oignons"),
            ],
            Some("Bourguignon de seitan"),
            Some("3h"),
            Some(6),
            Some("Moyen"),
        ),
        recipe(
            "Blanquette de veau",
            vec![
                RecipeSlot::original("veau"),
                RecipeSlot::original("crème fraîche"),
                RecipeSlot::original("beurre"),
                RecipeSlot::original("champignons"),
                RecipeSlot::original("carottes"),
                RecipeSlot::original("oignons"),
            ],
            None,
            Some("2h30"),
            Some(6),
            Some("Moyen"),
        ),
        recipe(
            "Quiche lorraine",
            vec![
                RecipeSlot::original("œufs"),
                RecipeSlot::original("crème fraîche"),
                RecipeSlot::with_vegan("lardons", "tofu fumé"),
                RecipeSlot::original("lait"),
                RecipeSlot::original("fromage"),
                RecipeSlot::original("farine"),
            ],
            Some("Quiche végétale au tofu fumé"),
            Some("1h"),
            Some(6),
            Some("Facile"),
        ),
        recipe(
            "Poulet basquaise",
            vec![
                RecipeSlot::original("poulet"),
                RecipeSlot::original("tomates"),
                RecipeSlot::default(),
                RecipeSlot::original("poivrons"),
                RecipeSlot::original("oignons"),
                RecipeSlot::original("huile d'olive"),
            ],
            None,
            Some("1h15"),
            Some(4),
            Some("Facile"),
        ),
        recipe(
            "Saumon en papillote",
            vec![
                RecipeSlot::original("saumon"),
                RecipeSlot::original("beurre"),
                RecipeSlot::original("citron"),
                RecipeSlot::original("courgettes"),
            ],
            None,
            None,
            None,
            None,
        ),
        recipe(
            "Gratin dauphinois",
            vec![
                RecipeSlot::original("pommes de terre"),
                RecipeSlot::original("lait"),
                RecipeSlot::original("crème fraîche"),
                RecipeSlot::original("ail"),
                RecipeSlot::original("fromage"),
            ],
            None,
            Some("1h30"),
            Some(6),
            Some("Facile"),
        ),
    ]
}

fn rule(
    original: &str,
    substitute: &str,
    ratio: f64,
    category: &str,
    notes: &str,
) -> SubstitutionRule {
    SubstitutionRule::new(original, substitute)
        .with_ratio(ratio)
        .with_category(category)
        .with_notes(notes)
}

fn builtin_substitutions() -> Vec<SubstitutionRule> {
    vec![
        rule(
            "lait",
            "lait végétal (soja, avoine, amande)",
            1.0,
            "produits_laitiers",
            "Choisir selon le goût désiré",
        ),
        rule(
            "beurre",
            "beurre végétal",
            1.0,
            "produits_laitiers",
            "Margarine végétale ou huile selon l'usage",
        ),
        rule(
            "crème fraîche",
            "crème de soja",
            1.0,
            "produits_laitiers",
            "Ou crème de coco pour plus de richesse",
        ),
        rule(
            "fromage",
            "fromage végétal",
            1.0,
            "produits_laitiers",
            "Levure nutritionnelle pour le goût umami",
        ),
        rule(
            "yaourt",
            "yaourt végétal",
            1.0,
            "produits_laitiers",
            "Soja, coco ou amande selon préférence",
        ),
        rule(
            "viande",
            "haché végétal",
            0.8,
            "viandes",
            "Prêt à l'emploi, savoureux et riche en protéines",
        ),
        rule(
            "bœuf",
            "haché végétal ou seitan",
            0.8,
            "viandes",
            "Haché végétal pour la facilité, seitan pour plus de texture",
        ),
        rule("porc", "tempeh ou tofu fumé", 0.9, "viandes", "Tempeh pour plus de saveur"),
        rule("veau", "haché végétal", 0.8, "viandes", "Texture tendre et goût authentique"),
        rule("agneau", "seitan aux herbes", 0.8, "viandes", "Ajouter romarin et thym"),
        rule(
            "poulet",
            "tofu ou morceaux de soja",
            0.9,
            "viandes",
            "Mariner le tofu pour plus de goût",
        ),
        rule("œuf", "substitut d'œuf ou aquafaba", 1.0, "œufs", "3 c.à.s d'aquafaba = 1 œuf"),
        rule(
            "œufs",
            "fécule de maïs + eau",
            1.0,
            "œufs",
            "Pour lier les sauces: 1 c.à.s de fécule + 2 c.à.s d'eau = 1 œuf",
        ),
        rule("poisson", "tofu aux algues", 1.0, "poissons", "Algues nori pour le goût iodé"),
        rule(
            "saumon",
            "carotte fumée ou tofu mariné",
            1.0,
            "poissons",
            "Carotte pour la couleur, fumage liquide pour le goût",
        ),
        rule(
            "miel",
            "sirop d'agave ou sirop d'érable",
            0.8,
            "édulcorants",
            "Réduire les autres liquides si nécessaire",
        ),
        rule("gélatine", "agar-agar", 0.5, "gélifiants", "Plus puissant que la gélatine"),
    ]
}

/// Values per 100 g: kcal, protein, carbs, fat, fiber, calcium, iron, zinc
fn food(code: &str, name: &str, values: [f64; 8]) -> NutritionRecord {
    let [calories, proteins, carbs, fats, fiber, calcium, iron, zinc] = values;
    NutritionRecord {
        code: Some(code.to_owned()),
        calories: Some(calories),
        proteins_g: Some(proteins),
        carbs_g: Some(carbs),
        fats_g: Some(fats),
        fiber_g: Some(fiber),
        calcium_mg: Some(calcium),
        iron_mg: Some(iron),
        zinc_mg: Some(zinc),
        ..NutritionRecord::named(name)
    }
}

fn builtin_nutrition() -> Vec<NutritionRecord> {
    vec![
        food("6254", "Boeuf, à bourguignon, cru", [142.0, 20.6, 0.0, 6.6, 0.0, 7.0, 2.3, 5.6]),
        food("6100", "Veau, épaule, crue", [121.0, 20.4, 0.0, 4.4, 0.0, 11.0, 0.9, 4.1]),
        food("36018", "Poulet, viande, crue", [121.0, 21.2, 0.0, 3.9, 0.0, 11.0, 0.7, 1.3]),
        food("28002", "Lardons, crus", [268.0, 15.9, 0.5, 22.5, 0.0, 8.0, 0.6, 1.9]),
        food("26036", "Saumon, cru, élevage", [203.0, 20.4, 0.0, 13.6, 0.0, 9.0, 0.3, 0.4]),
        food(
            "19024",
            "Lait de vache, entier, pasteurisé",
            [65.0, 3.3, 4.8, 3.6, 0.0, 117.0, 0.0, 0.4],
        ),
        food("16400", "Beurre doux", [745.0, 0.7, 0.8, 82.2, 0.0, 14.0, 0.0, 0.1]),
        food(
            "19402",
            "Crème fraîche épaisse, 30% MG",
            [292.0, 2.3, 3.2, 30.0, 0.0, 79.0, 0.1, 0.3],
        ),
        food("12115", "Fromage, emmental", [373.0, 28.6, 0.0, 28.9, 0.0, 1050.0, 0.2, 4.3]),
        food("22000", "Oeuf, cru", [140.0, 12.7, 0.3, 9.8, 0.0, 57.0, 1.9, 1.3]),
        food("20009", "Carotte, crue", [36.0, 0.6, 7.6, 0.3, 2.7, 27.0, 0.2, 0.2]),
        food("20034", "Oignon, cru", [35.0, 1.3, 6.2, 0.2, 1.8, 23.0, 0.2, 0.2]),
        food("20013", "Champignon de Paris, cru", [24.0, 3.1, 0.3, 0.3, 2.4, 5.0, 0.4, 0.5]),
        food("20047", "Tomate, crue", [18.0, 0.9, 2.5, 0.3, 1.2, 9.0, 0.2, 0.1]),
        food("20087", "Poivron rouge, cru", [27.0, 0.8, 5.0, 0.3, 1.9, 8.0, 0.3, 0.2]),
        food("20020", "Courgette, crue", [17.0, 1.2, 2.2, 0.3, 1.1, 16.0, 0.4, 0.3]),
        food("4003", "Pomme de terre, cuite à l'eau", [80.0, 1.8, 16.7, 0.1, 1.9, 5.0, 0.3, 0.3]),
        food("11000", "Ail, cru", [131.0, 6.6, 21.3, 0.5, 4.7, 17.0, 1.2, 1.0]),
        food("13011", "Citron, pulpe, cru", [39.0, 0.8, 7.3, 0.4, 2.1, 13.0, 0.2, 0.1]),
        food(
            "9410",
            "Farine de blé tendre ou froment T55",
            [343.0, 10.1, 71.5, 1.2, 3.3, 16.0, 1.1, 0.7],
        ),
        food("17270", "Huile d'olive vierge extra", [900.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0, 0.0]),
        food("5214", "Vin rouge 12°", [85.0, 0.1, 2.6, 0.0, 0.0, 8.0, 0.5, 0.1]),
        food("20904", "Tofu nature", [142.0, 14.3, 1.2, 8.7, 1.2, 350.0, 2.5, 1.5]),
        food("20905", "Seitan", [130.0, 24.5, 6.0, 1.8, 0.6, 40.0, 2.3, 0.9]),
        food("20532", "Lentille verte, cuite", [125.0, 10.1, 16.4, 0.6, 8.5, 21.0, 2.8, 1.3]),
        food("20530", "Pois chiche, cuit", [147.0, 8.5, 19.8, 2.3, 7.4, 49.0, 1.9, 1.2]),
        food("18900", "Boisson au soja, nature", [39.0, 3.5, 1.0, 2.0, 0.6, 120.0, 0.5, 0.3]),
        food(
            "19590",
            "Soupe aux légumes, préemballée",
            [30.0, 0.8, 4.5, 0.9, 1.1, 15.0, 0.3, 0.2],
        ),
    ]
}

fn metric(
    category: &str,
    co2_kg: f64,
    water_l: f64,
    land_m2: f64,
    biodiversity: f64,
) -> ClimateMetric {
    ClimateMetric::new(
        category,
        ClimateFactors {
            co2_kg,
            water_l,
            land_m2,
            biodiversity,
        },
    )
}

fn builtin_climate() -> Vec<ClimateMetric> {
    vec![
        metric("beef", 60.0, 1451.0, 164.0, 0.92),
        metric("pork", 7.2, 1796.0, 11.0, 0.5),
        metric("chicken", 6.1, 313.0, 7.1, 0.45),
        metric("fish", 5.1, 3691.0, 8.4, 0.6),
        metric("milk", 3.2, 628.0, 8.9, 0.35),
        metric("cheese", 21.2, 5605.0, 41.0, 0.7),
        metric("eggs", 4.5, 578.0, 5.7, 0.4),
        metric("tofu", 3.0, 149.0, 2.2, 0.15),
        metric("seitan", 1.2, 120.0, 1.8, 0.12),
        metric("tempeh", 1.6, 150.0, 2.0, 0.14),
        metric("lentils", 0.9, 435.0, 3.4, 0.1),
        metric("chickpeas", 0.9, 400.0, 3.0, 0.1),
        metric("vegetables", 0.5, 100.0, 0.4, 0.08),
        metric("grains", 1.4, 228.0, 2.9, 0.2),
        metric("nuts", 0.3, 4134.0, 7.9, 0.25),
    ]
}

fn builtin_supplements() -> Vec<Supplement> {
    let mut b12 = Supplement::new(B12, SupplementKind::Vitamin, SupplementPriority::Critical);
    b12.serving_size = Some("1 comprimé".to_owned());
    b12.description = Some("Cyanocobalamine, indispensable en alimentation végétale".to_owned());
    b12.vitamin_b12_ug = Some(25.0);
    b12.co2_kg_per_serving = Some(0.01);
    b12.water_l_per_serving = Some(0.5);
    b12.land_m2_per_serving = Some(0.01);
    b12.biodiversity_impact = Some(0.01);

    let mut omega = Supplement::new(OMEGA_3, SupplementKind::Omega, SupplementPriority::Critical);
    omega.serving_size = Some("2 capsules".to_owned());
    omega.description = Some("DHA et EPA issus de micro-algues".to_owned());
    omega.calories = Some(9.0);
    omega.fats_g = Some(1.0);
    omega.omega3_dha_mg = Some(250.0);
    omega.omega3_epa_mg = Some(125.0);
    omega.co2_kg_per_serving = Some(0.03);
    omega.water_l_per_serving = Some(1.0);
    omega.land_m2_per_serving = Some(0.01);
    omega.biodiversity_impact = Some(0.02);

    let mut iron = Supplement::new(IRON, SupplementKind::Mineral, SupplementPriority::High);
    iron.serving_size = Some("1 gélule".to_owned());
    iron.iron_mg = Some(14.0);
    iron.co2_kg_per_serving = Some(0.01);
    iron.water_l_per_serving = Some(0.3);
    iron.land_m2_per_serving = Some(0.0);
    iron.biodiversity_impact = Some(0.01);

    let mut zinc = Supplement::new(ZINC, SupplementKind::Mineral, SupplementPriority::High);
    zinc.serving_size = Some("1 gélule".to_owned());
    zinc.zinc_mg = Some(15.0);
    zinc.co2_kg_per_serving = Some(0.01);
    zinc.water_l_per_serving = Some(0.3);
    zinc.land_m2_per_serving = Some(0.0);
    zinc.biodiversity_impact = Some(0.01);

    let mut calcium = Supplement::new(CALCIUM, SupplementKind::Mineral, SupplementPriority::High);
    calcium.serving_size = Some("1 comprimé".to_owned());
    calcium.calcium_mg = Some(500.0);
    calcium.co2_kg_per_serving = Some(0.02);
    calcium.water_l_per_serving = Some(0.5);
    calcium.land_m2_per_serving = Some(0.01);
    calcium.biodiversity_impact = Some(0.01);

    let mut spirulina =
        Supplement::new(PROTEIN, SupplementKind::Protein, SupplementPriority::Medium);
    spirulina.serving_size = Some("5 g".to_owned());
    spirulina.calories = Some(20.0);
    spirulina.proteins_g = Some(3.2);
    spirulina.carbs_g = Some(1.2);
    spirulina.fats_g = Some(0.4);
    spirulina.calcium_mg = Some(6.0);
    spirulina.iron_mg = Some(1.4);
    spirulina.zinc_mg = Some(0.1);
    spirulina.co2_kg_per_serving = Some(0.05);
    spirulina.water_l_per_serving = Some(2.0);
    spirulina.land_m2_per_serving = Some(0.01);
    spirulina.biodiversity_impact = Some(0.02);

    vec![b12, omega, iron, zinc, calcium, spirulina]
}

fn animal(
    product_type: AnimalProductType,
    animal_type: AnimalType,
    animals_per_kg: f64,
    average_weight_kg: f64,
    lifespan_days: f64,
    actual_age_days: f64,
    notes: &str,
) -> AnimalImpactRecord {
    AnimalImpactRecord {
        average_weight_kg: Some(average_weight_kg),
        data_source: Some("FAO / Agreste".to_owned()),
        notes: Some(notes.to_owned()),
        ..AnimalImpactRecord::new(
            product_type,
            animal_type,
            animals_per_kg,
            Some(lifespan_days),
            Some(actual_age_days),
        )
    }
}

fn builtin_animal_impacts() -> Vec<AnimalImpactRecord> {
    vec![
        animal(
            AnimalProductType::Beef,
            AnimalType::Cow,
            0.004,
            250.0,
            7300.0,
            730.0,
            "Bovin à viande, carcasse moyenne",
        ),
        animal(
            AnimalProductType::Pork,
            AnimalType::Pig,
            0.011,
            90.0,
            5475.0,
            180.0,
            "Porc charcutier",
        ),
        animal(
            AnimalProductType::Chicken,
            AnimalType::Chicken,
            0.5,
            2.0,
            2920.0,
            42.0,
            "Poulet de chair standard",
        ),
        animal(
            AnimalProductType::Fish,
            AnimalType::Fish,
            2.0,
            0.5,
            1825.0,
            730.0,
            "Poissons d'élevage et sauvages",
        ),
        animal(
            AnimalProductType::Dairy,
            AnimalType::CowDairy,
            0.0004,
            600.0,
            7300.0,
            1825.0,
            "Vache laitière sur sa carrière",
        ),
        animal(
            AnimalProductType::Eggs,
            AnimalType::Hen,
            0.06,
            2.0,
            2920.0,
            540.0,
            "Poule pondeuse",
        ),
    ]
}
