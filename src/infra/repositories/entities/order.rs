//! Order entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Order;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    pub phone: String,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub payment_method: String,
    pub address: String,
    pub price: f64,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(model: Model) -> Self {
        Order {
            id: model.id,
            firstname: model.firstname,
            lastname: model.lastname,
            user_id: model.user_id,
            phone: model.phone,
            product_id: model.product_id,
            product_name: model.product_name,
            quantity: model.quantity,
            payment_method: model.payment_method,
            address: model.address,
            price: model.price,
            status: model.status,
            created_at: model.created_at,
        }
    }
}
