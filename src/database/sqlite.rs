// ABOUTME: SQLite reference store implementing every repository trait with sqlx
// ABOUTME: Creates the schema at startup, seeds from ReferenceData and keys rows by normalized name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `SQLite` Reference Store
//!
//! Each table carries a normalized key column next to the display name, so
//! keyed lookups are plain equality queries. Listings are ordered by `rowid`,
//! which keeps the insertion order the nutrition matcher depends on.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::{debug, info};
use uuid::Uuid;
use veganizer_core::errors::DatabaseError;
use veganizer_core::models::{
    AnimalImpactRecord, AnimalProductType, AnimalType, ClimateMetric, NutritionRecord, Recipe,
    RecipeSlot, SubstitutionRule, Supplement, SupplementKind, SupplementPriority,
};
use veganizer_intelligence::{normalize, substitution_key, NormalizeMode};

use super::repositories::{
    AnimalImpactRepository, ClimateRepository, NutritionRepository, RecipeRepository,
    SubstitutionRepository, SupplementRepository,
};
use super::seed::ReferenceData;

fn name_key(name: &str) -> String {
    normalize(name, NormalizeMode::Key)
}

/// Reference store backed by a `SQLite` database
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `database_url` and create the schema
    ///
    /// `database_url` is `sqlite:<path>` or `sqlite::memory:`; file databases
    /// are created when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the schema creation fails
    pub async fn connect(database_url: &str) -> Result<Self, DatabaseError> {
        // Every connection to sqlite::memory: opens its own database
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(database_url)
                .await
        } else {
            SqlitePool::connect(&format!("{database_url}?mode=rwc")).await
        }
        .map_err(|e| DatabaseError::ConnectionError {
            context: format!("{database_url}: {e}"),
        })?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Get a reference to the pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create every reference table
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::MigrationError` if a statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        let statements: [(&str, &str); 8] = [
            (
                "recipes",
                r"
                CREATE TABLE IF NOT EXISTS recipes (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    name_key TEXT NOT NULL,
                    slots TEXT NOT NULL,
                    vegan_name TEXT,
                    cooking_time TEXT,
                    servings INTEGER,
                    difficulty TEXT,
                    created_at TEXT NOT NULL
                )
                ",
            ),
            (
                "recipes index",
                "CREATE INDEX IF NOT EXISTS idx_recipes_name_key ON recipes(name_key)",
            ),
            (
                "substitution_rules",
                r"
                CREATE TABLE IF NOT EXISTS substitution_rules (
                    id TEXT PRIMARY KEY,
                    original_ingredient TEXT NOT NULL,
                    original_key TEXT NOT NULL UNIQUE,
                    vegan_substitute TEXT NOT NULL,
                    substitution_ratio REAL NOT NULL DEFAULT 1.0,
                    category TEXT,
                    notes TEXT,
                    created_at TEXT NOT NULL
                )
                ",
            ),
            (
                "nutrition_records",
                r"
                CREATE TABLE IF NOT EXISTS nutrition_records (
                    id TEXT PRIMARY KEY,
                    code TEXT,
                    name TEXT NOT NULL,
                    name_key TEXT NOT NULL,
                    calories REAL,
                    proteins_g REAL,
                    carbs_g REAL,
                    fats_g REAL,
                    fiber_g REAL,
                    calcium_mg REAL,
                    iron_mg REAL,
                    zinc_mg REAL,
                    vitamin_b12_ug REAL,
                    vitamin_d_ug REAL,
                    created_at TEXT NOT NULL
                )
                ",
            ),
            (
                "nutrition index",
                "CREATE INDEX IF NOT EXISTS idx_nutrition_name_key ON nutrition_records(name_key)",
            ),
            (
                "climate_metrics",
                r"
                CREATE TABLE IF NOT EXISTS climate_metrics (
                    category_key TEXT PRIMARY KEY,
                    category TEXT NOT NULL,
                    co2_kg_per_kg REAL,
                    water_l_per_kg REAL,
                    land_m2_per_kg REAL,
                    biodiversity_impact REAL,
                    created_at TEXT NOT NULL
                )
                ",
            ),
            (
                "supplements",
                r"
                CREATE TABLE IF NOT EXISTS supplements (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    name_key TEXT NOT NULL UNIQUE,
                    kind TEXT NOT NULL,
                    priority TEXT NOT NULL,
                    serving_size TEXT,
                    affiliate_link TEXT,
                    description TEXT,
                    calories REAL,
                    proteins_g REAL,
                    carbs_g REAL,
                    fats_g REAL,
                    fiber_g REAL,
                    calcium_mg REAL,
                    iron_mg REAL,
                    zinc_mg REAL,
                    vitamin_b12_ug REAL,
                    omega3_dha_mg REAL,
                    omega3_epa_mg REAL,
                    co2_kg_per_serving REAL,
                    water_l_per_serving REAL,
                    land_m2_per_serving REAL,
                    biodiversity_impact REAL,
                    created_at TEXT NOT NULL
                )
                ",
            ),
            (
                "animal_impacts",
                r"
                CREATE TABLE IF NOT EXISTS animal_impacts (
                    product_type TEXT PRIMARY KEY,
                    animal_type TEXT NOT NULL,
                    animals_per_kg REAL NOT NULL,
                    average_weight_kg REAL,
                    lifespan_days REAL,
                    actual_age_days REAL,
                    data_source TEXT,
                    notes TEXT,
                    created_at TEXT NOT NULL
                )
                ",
            ),
        ];

        for (name, statement) in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::MigrationError {
                    context: format!("{name}: {e}"),
                })?;
        }

        debug!("Reference schema ready");
        Ok(())
    }

    /// No reference row stored in any table
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails
    pub async fn is_empty(&self) -> Result<bool, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT (SELECT COUNT(*) FROM recipes)
                 + (SELECT COUNT(*) FROM substitution_rules)
                 + (SELECT COUNT(*) FROM nutrition_records)
                 + (SELECT COUNT(*) FROM climate_metrics)
                 + (SELECT COUNT(*) FROM supplements)
                 + (SELECT COUNT(*) FROM animal_impacts) AS total
            ",
        )
        .fetch_one(&self.pool)
        .await?;
        let total: i64 = row.try_get("total")?;
        Ok(total == 0)
    }

    /// Insert every record of `data` in one transaction, returning the rows written
    ///
    /// Climate metrics, supplements and animal impacts already present under
    /// the same key are left untouched. Nothing is written when any insert
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateKey` for a substitution rule whose
    /// normalized original is already stored, or a query error
    pub async fn seed(&self, data: &ReferenceData) -> Result<usize, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        let mut written = 0;
        for recipe in &data.recipes {
            insert_recipe(&mut *tx, recipe).await?;
            written += 1;
        }
        for rule in &data.substitutions {
            insert_substitution(&mut *tx, rule).await?;
            written += 1;
        }
        for record in &data.nutrition {
            insert_nutrition(&mut *tx, record).await?;
            written += 1;
        }
        for metric in &data.climate {
            written += usize::from(insert_climate_metric(&mut *tx, metric).await?);
        }
        for supplement in &data.supplements {
            written += usize::from(insert_supplement(&mut *tx, supplement).await?);
        }
        for record in &data.animal_impacts {
            written += usize::from(insert_animal_impact(&mut *tx, record).await?);
        }
        tx.commit().await?;

        info!(rows = written, "Seeded SQLite reference store");
        Ok(written)
    }

    /// Seed only when every table is empty, returning the rows written
    ///
    /// # Errors
    ///
    /// Returns an error if counting or seeding fails
    pub async fn seed_if_empty(&self, data: &ReferenceData) -> Result<usize, DatabaseError> {
        if self.is_empty().await? {
            self.seed(data).await
        } else {
            debug!("SQLite reference store already populated, skipping seed");
            Ok(0)
        }
    }
}

/// Store a recipe
async fn insert_recipe(
    conn: &mut SqliteConnection,
    recipe: &Recipe,
) -> Result<(), DatabaseError> {
    let slots = serde_json::to_string(&recipe.slots).map_err(|e| {
        DatabaseError::SerializationError {
            context: format!("recipe slots: {e}"),
        }
    })?;

    sqlx::query(
        r"
        INSERT INTO recipes (
            id, name, name_key, slots, vegan_name, cooking_time, servings, difficulty,
            created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ",
    )
    .bind(recipe.id.to_string())
    .bind(&recipe.name)
    .bind(name_key(&recipe.name))
    .bind(slots)
    .bind(&recipe.vegan_name)
    .bind(&recipe.cooking_time)
    .bind(recipe.servings.map(i64::from))
    .bind(&recipe.difficulty)
    .bind(Utc::now().to_rfc3339())
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Store a substitution rule
async fn insert_substitution(
    conn: &mut SqliteConnection,
    rule: &SubstitutionRule,
) -> Result<(), DatabaseError> {
    let key = substitution_key(&rule.original_ingredient);
    let existing = sqlx::query("SELECT 1 FROM substitution_rules WHERE original_key = $1")
        .bind(&key)
        .fetch_optional(&mut *conn)
        .await?;
    if existing.is_some() {
        return Err(DatabaseError::DuplicateKey {
            entity_type: "substitution_rule",
            key,
        });
    }

    sqlx::query(
        r"
        INSERT INTO substitution_rules (
            id, original_ingredient, original_key, vegan_substitute, substitution_ratio,
            category, notes, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ",
    )
    .bind(rule.id.to_string())
    .bind(&rule.original_ingredient)
    .bind(&key)
    .bind(&rule.vegan_substitute)
    .bind(rule.substitution_ratio)
    .bind(&rule.category)
    .bind(&rule.notes)
    .bind(Utc::now().to_rfc3339())
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Store a nutrition record
async fn insert_nutrition(
    conn: &mut SqliteConnection,
    record: &NutritionRecord,
) -> Result<(), DatabaseError> {
    sqlx::query(
        r"
        INSERT INTO nutrition_records (
            id, code, name, name_key, calories, proteins_g, carbs_g, fats_g, fiber_g,
            calcium_mg, iron_mg, zinc_mg, vitamin_b12_ug, vitamin_d_ug, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        ",
    )
    .bind(record.id.to_string())
    .bind(&record.code)
    .bind(&record.name)
    .bind(name_key(&record.name))
    .bind(record.calories)
    .bind(record.proteins_g)
    .bind(record.carbs_g)
    .bind(record.fats_g)
    .bind(record.fiber_g)
    .bind(record.calcium_mg)
    .bind(record.iron_mg)
    .bind(record.zinc_mg)
    .bind(record.vitamin_b12_ug)
    .bind(record.vitamin_d_ug)
    .bind(Utc::now().to_rfc3339())
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Store a climate metric, returning whether a row was written
async fn insert_climate_metric(
    conn: &mut SqliteConnection,
    metric: &ClimateMetric,
) -> Result<bool, DatabaseError> {
    let result = sqlx::query(
        r"
        INSERT OR IGNORE INTO climate_metrics (
            category_key, category, co2_kg_per_kg, water_l_per_kg, land_m2_per_kg,
            biodiversity_impact, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7)
        ",
    )
    .bind(name_key(&metric.category))
    .bind(&metric.category)
    .bind(metric.co2_kg_per_kg)
    .bind(metric.water_l_per_kg)
    .bind(metric.land_m2_per_kg)
    .bind(metric.biodiversity_impact)
    .bind(Utc::now().to_rfc3339())
    .execute(&mut *conn)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Store a supplement, returning whether a row was written
async fn insert_supplement(
    conn: &mut SqliteConnection,
    supplement: &Supplement,
) -> Result<bool, DatabaseError> {
    let result = sqlx::query(
        r"
        INSERT OR IGNORE INTO supplements (
            id, name, name_key, kind, priority, serving_size, affiliate_link, description,
            calories, proteins_g, carbs_g, fats_g, fiber_g, calcium_mg, iron_mg, zinc_mg,
            vitamin_b12_ug, omega3_dha_mg, omega3_epa_mg, co2_kg_per_serving,
            water_l_per_serving, land_m2_per_serving, biodiversity_impact, created_at
        ) VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
            $17, $18, $19, $20, $21, $22, $23, $24
        )
        ",
    )
    .bind(supplement.id.to_string())
    .bind(&supplement.name)
    .bind(name_key(&supplement.name))
    .bind(supplement.kind.as_str())
    .bind(supplement.priority.as_str())
    .bind(&supplement.serving_size)
    .bind(&supplement.affiliate_link)
    .bind(&supplement.description)
    .bind(supplement.calories)
    .bind(supplement.proteins_g)
    .bind(supplement.carbs_g)
    .bind(supplement.fats_g)
    .bind(supplement.fiber_g)
    .bind(supplement.calcium_mg)
    .bind(supplement.iron_mg)
    .bind(supplement.zinc_mg)
    .bind(supplement.vitamin_b12_ug)
    .bind(supplement.omega3_dha_mg)
    .bind(supplement.omega3_epa_mg)
    .bind(supplement.co2_kg_per_serving)
    .bind(supplement.water_l_per_serving)
    .bind(supplement.land_m2_per_serving)
    .bind(supplement.biodiversity_impact)
    .bind(Utc::now().to_rfc3339())
    .execute(&mut *conn)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Store an animal impact record, returning whether a row was written
async fn insert_animal_impact(
    conn: &mut SqliteConnection,
    record: &AnimalImpactRecord,
) -> Result<bool, DatabaseError> {
    let result = sqlx::query(
        r"
        INSERT OR IGNORE INTO animal_impacts (
            product_type, animal_type, animals_per_kg, average_weight_kg, lifespan_days,
            actual_age_days, data_source, notes, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ",
    )
    .bind(record.product_type.as_str())
    .bind(record.animal_type.as_str())
    .bind(record.animals_per_kg)
    .bind(record.average_weight_kg)
    .bind(record.lifespan_days)
    .bind(record.actual_age_days)
    .bind(&record.data_source)
    .bind(&record.notes)
    .bind(Utc::now().to_rfc3339())
    .execute(&mut *conn)
    .await?;
    Ok(result.rows_affected() > 0)
}

#[async_trait]
impl RecipeRepository for SqliteStore {
    async fn get_by_name(&self, name: &str) -> Result<Option<Recipe>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT id, name, slots, vegan_name, cooking_time, servings, difficulty
            FROM recipes
            WHERE name_key = $1
            ORDER BY rowid
            LIMIT 1
            ",
        )
        .bind(name_key(name))
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT id, name, slots, vegan_name, cooking_time, servings, difficulty
            FROM recipes
            ORDER BY rowid
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_recipe).collect()
    }
}

#[async_trait]
impl SubstitutionRepository for SqliteStore {
    async fn get_by_original(
        &self,
        original: &str,
    ) -> Result<Option<SubstitutionRule>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT id, original_ingredient, vegan_substitute, substitution_ratio, category, notes
            FROM substitution_rules
            WHERE original_key = $1
            ",
        )
        .bind(substitution_key(original))
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_substitution(&r)).transpose()
    }

    async fn list_all(&self) -> Result<Vec<SubstitutionRule>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT id, original_ingredient, vegan_substitute, substitution_ratio, category, notes
            FROM substitution_rules
            ORDER BY rowid
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_substitution).collect()
    }
}

#[async_trait]
impl NutritionRepository for SqliteStore {
    async fn get_by_name(&self, name: &str) -> Result<Option<NutritionRecord>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT id, code, name, calories, proteins_g, carbs_g, fats_g, fiber_g, calcium_mg,
                   iron_mg, zinc_mg, vitamin_b12_ug, vitamin_d_ug
            FROM nutrition_records
            WHERE name_key = $1
            ORDER BY rowid
            LIMIT 1
            ",
        )
        .bind(name_key(name))
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_nutrition(&r)).transpose()
    }

    async fn list_all(&self) -> Result<Vec<NutritionRecord>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT id, code, name, calories, proteins_g, carbs_g, fats_g, fiber_g, calcium_mg,
                   iron_mg, zinc_mg, vitamin_b12_ug, vitamin_d_ug
            FROM nutrition_records
            ORDER BY rowid
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_nutrition).collect()
    }
}

#[async_trait]
impl ClimateRepository for SqliteStore {
    async fn get_by_category(
        &self,
        category: &str,
    ) -> Result<Option<ClimateMetric>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT category, co2_kg_per_kg, water_l_per_kg, land_m2_per_kg, biodiversity_impact
            FROM climate_metrics
            WHERE category_key = $1
              AND co2_kg_per_kg IS NOT NULL
              AND water_l_per_kg IS NOT NULL
              AND land_m2_per_kg IS NOT NULL
              AND biodiversity_impact IS NOT NULL
            ",
        )
        .bind(name_key(category))
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_climate(&r)).transpose()
    }

    async fn list_all(&self) -> Result<Vec<ClimateMetric>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT category, co2_kg_per_kg, water_l_per_kg, land_m2_per_kg, biodiversity_impact
            FROM climate_metrics
            ORDER BY rowid
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_climate).collect()
    }
}

const SUPPLEMENT_COLUMNS: &str = r"
    SELECT id, name, kind, priority, serving_size, affiliate_link, description, calories,
           proteins_g, carbs_g, fats_g, fiber_g, calcium_mg, iron_mg, zinc_mg, vitamin_b12_ug,
           omega3_dha_mg, omega3_epa_mg, co2_kg_per_serving, water_l_per_serving,
           land_m2_per_serving, biodiversity_impact
    FROM supplements
";

#[async_trait]
impl SupplementRepository for SqliteStore {
    async fn get_by_name(&self, name: &str) -> Result<Option<Supplement>, DatabaseError> {
        let query = format!("{SUPPLEMENT_COLUMNS} WHERE name_key = $1");
        let row = sqlx::query(&query)
            .bind(name_key(name))
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_supplement(&r)).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Supplement>, DatabaseError> {
        let query = format!("{SUPPLEMENT_COLUMNS} ORDER BY rowid");
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        rows.iter().map(row_to_supplement).collect()
    }
}

#[async_trait]
impl AnimalImpactRepository for SqliteStore {
    async fn get_by_product(
        &self,
        product: AnimalProductType,
    ) -> Result<Option<AnimalImpactRecord>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT product_type, animal_type, animals_per_kg, average_weight_kg, lifespan_days,
                   actual_age_days, data_source, notes
            FROM animal_impacts
            WHERE product_type = $1
            ",
        )
        .bind(product.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_animal_impact(&r)).transpose()
    }

    async fn list_all(&self) -> Result<Vec<AnimalImpactRecord>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT product_type, animal_type, animals_per_kg, average_weight_kg, lifespan_days,
                   actual_age_days, data_source, notes
            FROM animal_impacts
            ORDER BY rowid
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_animal_impact).collect()
    }
}

fn parse_id(row: &SqliteRow) -> Result<Uuid, DatabaseError> {
    let id: String = row.try_get("id")?;
    Uuid::parse_str(&id).map_err(|e| DatabaseError::SerializationError {
        context: format!("Invalid UUID '{id}': {e}"),
    })
}

fn row_to_recipe(row: &SqliteRow) -> Result<Recipe, DatabaseError> {
    let slots_json: String = row.try_get("slots")?;
    let slots: Vec<RecipeSlot> =
        serde_json::from_str(&slots_json).map_err(|e| DatabaseError::SerializationError {
            context: format!("recipe slots: {e}"),
        })?;
    let servings: Option<i64> = row.try_get("servings")?;

    Ok(Recipe {
        id: parse_id(row)?,
        name: row.try_get("name")?,
        slots,
        vegan_name: row.try_get("vegan_name")?,
        cooking_time: row.try_get("cooking_time")?,
        servings: servings.and_then(|s| u32::try_from(s).ok()),
        difficulty: row.try_get("difficulty")?,
    })
}

fn row_to_substitution(row: &SqliteRow) -> Result<SubstitutionRule, DatabaseError> {
    Ok(SubstitutionRule {
        id: parse_id(row)?,
        original_ingredient: row.try_get("original_ingredient")?,
        vegan_substitute: row.try_get("vegan_substitute")?,
        substitution_ratio: row.try_get("substitution_ratio")?,
        category: row.try_get("category")?,
        notes: row.try_get("notes")?,
    })
}

fn row_to_nutrition(row: &SqliteRow) -> Result<NutritionRecord, DatabaseError> {
    Ok(NutritionRecord {
        id: parse_id(row)?,
        code: row.try_get("code")?,
        name: row.try_get("name")?,
        calories: row.try_get("calories")?,
        proteins_g: row.try_get("proteins_g")?,
        carbs_g: row.try_get("carbs_g")?,
        fats_g: row.try_get("fats_g")?,
        fiber_g: row.try_get("fiber_g")?,
        calcium_mg: row.try_get("calcium_mg")?,
        iron_mg: row.try_get("iron_mg")?,
        zinc_mg: row.try_get("zinc_mg")?,
        vitamin_b12_ug: row.try_get("vitamin_b12_ug")?,
        vitamin_d_ug: row.try_get("vitamin_d_ug")?,
    })
}

fn row_to_climate(row: &SqliteRow) -> Result<ClimateMetric, DatabaseError> {
    Ok(ClimateMetric {
        category: row.try_get("category")?,
        co2_kg_per_kg: row.try_get("co2_kg_per_kg")?,
        water_l_per_kg: row.try_get("water_l_per_kg")?,
        land_m2_per_kg: row.try_get("land_m2_per_kg")?,
        biodiversity_impact: row.try_get("biodiversity_impact")?,
    })
}

fn row_to_supplement(row: &SqliteRow) -> Result<Supplement, DatabaseError> {
    let kind: String = row.try_get("kind")?;
    let priority: String = row.try_get("priority")?;

    Ok(Supplement {
        id: parse_id(row)?,
        name: row.try_get("name")?,
        kind: SupplementKind::from_str_lossy(&kind),
        priority: SupplementPriority::from_str_lossy(&priority),
        serving_size: row.try_get("serving_size")?,
        affiliate_link: row.try_get("affiliate_link")?,
        description: row.try_get("description")?,
        calories: row.try_get("calories")?,
        proteins_g: row.try_get("proteins_g")?,
        carbs_g: row.try_get("carbs_g")?,
        fats_g: row.try_get("fats_g")?,
        fiber_g: row.try_get("fiber_g")?,
        calcium_mg: row.try_get("calcium_mg")?,
        iron_mg: row.try_get("iron_mg")?,
        zinc_mg: row.try_get("zinc_mg")?,
        vitamin_b12_ug: row.try_get("vitamin_b12_ug")?,
        omega3_dha_mg: row.try_get("omega3_dha_mg")?,
        omega3_epa_mg: row.try_get("omega3_epa_mg")?,
        co2_kg_per_serving: row.try_get("co2_kg_per_serving")?,
        water_l_per_serving: row.try_get("water_l_per_serving")?,
        land_m2_per_serving: row.try_get("land_m2_per_serving")?,
        biodiversity_impact: row.try_get("biodiversity_impact")?,
    })
}

fn row_to_animal_impact(row: &SqliteRow) -> Result<AnimalImpactRecord, DatabaseError> {
    let product: String = row.try_get("product_type")?;
    let animal: String = row.try_get("animal_type")?;

    Ok(AnimalImpactRecord {
        product_type: AnimalProductType::parse(&product).ok_or_else(|| {
            DatabaseError::SerializationError {
                context: format!("Unknown product type '{product}'"),
            }
        })?,
        animal_type: AnimalType::parse(&animal).ok_or_else(|| {
            DatabaseError::SerializationError {
                context: format!("Unknown animal type '{animal}'"),
            }
        })?,
        animals_per_kg: row.try_get("animals_per_kg")?,
        average_weight_kg: row.try_get("average_weight_kg")?,
        lifespan_days: row.try_get("lifespan_days")?,
        actual_age_days: row.try_get("actual_age_days")?,
        data_source: row.try_get("data_source")?,
        notes: row.try_get("notes")?,
    })
}
