use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, family};

/// Catalog product. The wattage and color-temperature columns carry free-text
/// descriptors ("3W-40W", "4000K,5000K,6000K") parsed by the service layer;
/// malformed values are legal data here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub family_id: i32,
    pub image: Option<String>,
    pub wattage: Option<String>,
    pub color_temp: Option<String>,
    pub mounting_type: Option<String>,
    pub light_distribution: Option<String>,
    pub lamp_type: Option<String>,
    pub ip_rating: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Family }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Family => Entity::belongs_to(family::Entity)
                .from(Column::FamilyId)
                .to(family::Column::Id)
                .into(),
        }
    }
}

impl Related<family::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Family.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert payload for seeding and administration tooling; the HTTP surface
/// itself is read-only.
#[derive(Clone, Debug, Default)]
pub struct NewProduct {
    pub name: String,
    pub family_id: i32,
    pub image: Option<String>,
    pub wattage: Option<String>,
    pub color_temp: Option<String>,
    pub mounting_type: Option<String>,
    pub light_distribution: Option<String>,
    pub lamp_type: Option<String>,
    pub ip_rating: Option<String>,
}

pub async fn create(db: &DatabaseConnection, input: NewProduct) -> Result<Model, errors::ModelError> {
    if input.name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    let am = ActiveModel {
        name: Set(input.name),
        family_id: Set(input.family_id),
        image: Set(input.image),
        wattage: Set(input.wattage),
        color_temp: Set(input.color_temp),
        mounting_type: Set(input.mounting_type),
        light_distribution: Set(input.light_distribution),
        lamp_type: Set(input.lamp_type),
        ip_rating: Set(input.ip_rating),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
