//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::RepoError;
use quill_core::domain::{AccountInfo, AuthorSummary, PersonalInfo, PublicPersonalInfo, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub fullname: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(nullable)]
    pub password: Option<String>,
    #[sea_orm(unique)]
    pub username: String,
    pub bio: String,
    pub profile_img: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub social_links: Json,
    pub total_posts: i64,
    pub total_reads: i64,
    pub google_auth: bool,
    pub blogs: Vec<Uuid>,
    pub joined_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blog::Entity")]
    Blogs,
}

impl Related<super::blog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The public author fields joined onto blog listings.
    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            personal_info: PublicPersonalInfo {
                fullname: self.fullname.clone(),
                username: self.username.clone(),
                profile_img: self.profile_img.clone(),
            },
        }
    }
}

/// Conversion from SeaORM Model to domain User.
impl TryFrom<Model> for User {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let social_links = serde_json::from_value(model.social_links).map_err(|e| {
            RepoError::Corrupt(format!("user {} social links: {e}", model.username))
        })?;

        Ok(Self {
            id: model.id,
            personal_info: PersonalInfo {
                fullname: model.fullname,
                email: model.email,
                password: model.password,
                username: model.username,
                bio: model.bio,
                profile_img: model.profile_img,
            },
            social_links,
            account_info: AccountInfo {
                total_posts: model.total_posts,
                total_reads: model.total_reads,
            },
            google_auth: model.google_auth,
            blogs: model.blogs,
            joined_at: model.joined_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

/// Conversion from domain User to SeaORM ActiveModel.
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        let social_links = serde_json::to_value(&user.social_links).unwrap_or_default();

        Self {
            id: Set(user.id),
            fullname: Set(user.personal_info.fullname),
            email: Set(user.personal_info.email),
            password: Set(user.personal_info.password),
            username: Set(user.personal_info.username),
            bio: Set(user.personal_info.bio),
            profile_img: Set(user.personal_info.profile_img),
            social_links: Set(social_links),
            total_posts: Set(user.account_info.total_posts),
            total_reads: Set(user.account_info.total_reads),
            google_auth: Set(user.google_auth),
            blogs: Set(user.blogs),
            joined_at: Set(user.joined_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}
