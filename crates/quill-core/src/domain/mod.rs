//! Domain entities and the pure rules around them.

mod blog;
pub mod identifiers;
pub mod pagination;
pub mod search;
mod user;
pub mod validation;

pub use blog::{
    Activity, Blog, BlogCard, BlogContent, BlogDetail, BlogInput, BlogWithAuthor, ContentBlock,
    TrendingBlog,
};
pub use user::{
    AccountInfo, AuthorSummary, PersonalInfo, ProfilePersonalInfo, PublicPersonalInfo, SocialLinks,
    User, UserProfile,
};
