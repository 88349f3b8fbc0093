use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Avatar service used for accounts that never uploaded a profile image.
const DEFAULT_AVATAR_BASE: &str = "https://api.dicebear.com/6.x/notionists-neutral/svg?seed=";

/// Identity and presentation fields of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub fullname: String,
    pub email: String,
    /// Argon2 hash. `None` for accounts created through a third-party provider.
    pub password: Option<String>,
    pub username: String,
    pub bio: String,
    pub profile_img: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub youtube: String,
    pub instagram: String,
    pub facebook: String,
    pub twitter: String,
    pub github: String,
    pub website: String,
}

/// Aggregate counters maintained as the user publishes and gets read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub total_posts: i64,
    pub total_reads: i64,
}

/// User entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub personal_info: PersonalInfo,
    pub social_links: SocialLinks,
    pub account_info: AccountInfo,
    pub google_auth: bool,
    /// Internal ids of owned blogs, in creation order.
    pub blogs: Vec<Uuid>,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a password-authenticated user with a generated avatar.
    pub fn new(fullname: String, email: String, password_hash: String, username: String) -> Self {
        let now = Utc::now();
        let profile_img = format!("{DEFAULT_AVATAR_BASE}{username}");
        Self {
            id: Uuid::new_v4(),
            personal_info: PersonalInfo {
                fullname,
                email,
                password: Some(password_hash),
                username,
                bio: String::new(),
                profile_img,
            },
            social_links: SocialLinks::default(),
            account_info: AccountInfo::default(),
            google_auth: false,
            blogs: Vec::new(),
            joined_at: now,
            updated_at: now,
        }
    }

    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            personal_info: PublicPersonalInfo {
                fullname: self.personal_info.fullname.clone(),
                username: self.personal_info.username.clone(),
                profile_img: self.personal_info.profile_img.clone(),
            },
        }
    }
}

/// The author fields joined onto listed blogs and user search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub personal_info: PublicPersonalInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPersonalInfo {
    pub fullname: String,
    pub username: String,
    pub profile_img: String,
}

/// Public profile: everything except the password, provider flag,
/// update timestamp and blog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub personal_info: ProfilePersonalInfo,
    pub social_links: SocialLinks,
    pub account_info: AccountInfo,
    #[serde(rename = "joinedAt")]
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePersonalInfo {
    pub fullname: String,
    pub email: String,
    pub username: String,
    pub bio: String,
    pub profile_img: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let PersonalInfo {
            fullname,
            email,
            username,
            bio,
            profile_img,
            ..
        } = user.personal_info;
        Self {
            personal_info: ProfilePersonalInfo {
                fullname,
                email,
                username,
                bio,
                profile_img,
            },
            social_links: user.social_links,
            account_info: user.account_info,
            joined_at: user.joined_at,
        }
    }
}
