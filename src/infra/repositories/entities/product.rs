//! Product entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub productname: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    /// Category name; not a foreign key
    pub category: String,
    pub count_in_stock: i32,
    pub rating: f64,
    pub date_created: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: model.id,
            productname: model.productname,
            description: model.description,
            price: model.price,
            image: model.image,
            category: model.category,
            count_in_stock: model.count_in_stock,
            rating: model.rating,
            date_created: model.date_created,
        }
    }
}
