//! Blog entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::RepoError;
use quill_core::domain::{Activity, Blog};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub blog_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub banner: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub content: Json,
    pub tags: Vec<String>,
    #[sea_orm(indexed)]
    pub author_id: Uuid,
    pub draft: bool,
    pub total_likes: i64,
    pub total_comments: i64,
    pub total_reads: i64,
    pub total_parent_comments: i64,
    pub published_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Blog.
impl TryFrom<Model> for Blog {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let content = serde_json::from_value(model.content).map_err(|e| {
            RepoError::Corrupt(format!("blog {} content: {e}", model.blog_id))
        })?;

        Ok(Self {
            id: model.id,
            blog_id: model.blog_id,
            title: model.title,
            desc: model.description,
            banner: model.banner,
            content,
            tags: model.tags,
            author: model.author_id,
            draft: model.draft,
            activity: Activity {
                total_likes: model.total_likes,
                total_comments: model.total_comments,
                total_reads: model.total_reads,
                total_parent_comments: model.total_parent_comments,
            },
            published_at: model.published_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

/// Conversion from domain Blog to SeaORM ActiveModel.
impl From<Blog> for ActiveModel {
    fn from(blog: Blog) -> Self {
        // Serializing plain data structs into a `Value` cannot fail.
        let content = serde_json::to_value(&blog.content).unwrap_or_default();

        Self {
            id: Set(blog.id),
            blog_id: Set(blog.blog_id),
            title: Set(blog.title),
            description: Set(blog.desc),
            banner: Set(blog.banner),
            content: Set(content),
            tags: Set(blog.tags),
            author_id: Set(blog.author),
            draft: Set(blog.draft),
            total_likes: Set(blog.activity.total_likes),
            total_comments: Set(blog.activity.total_comments),
            total_reads: Set(blog.activity.total_reads),
            total_parent_comments: Set(blog.activity.total_parent_comments),
            published_at: Set(blog.published_at.into()),
            updated_at: Set(blog.updated_at.into()),
        }
    }
}
