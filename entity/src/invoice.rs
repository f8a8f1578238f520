use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub booking_detail_id: i32,
    pub user_id: i32,
    pub price: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking_detail::Entity",
        from = "Column::BookingDetailId",
        to = "super::booking_detail::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BookingDetail,
}

impl Related<super::booking_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
