use super::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tour")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, unique)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub blurb: String,
    pub price: i32,
    /// human readable length, e.g. "3 days"
    pub duration: String,
    pub tour_package_code: String,
    #[sea_orm(default_value = "3")]
    pub difficulty: Difficulty,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tour_package::Entity",
        from = "Column::TourPackageCode",
        to = "super::tour_package::Column::Code"
    )]
    TourPackage,
    #[sea_orm(has_many = "super::tour_rating::Entity")]
    TourRating,
}

impl Related<super::tour_package::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourPackage.def()
    }
}

impl Related<super::tour_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourRating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// level of effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Difficulty {
    Easy = 0,
    Medium = 1,
    Difficult = 2,
    Varies = 3,
}
