//! User search and public profiles.

use actix_web::{HttpResponse, web};

use quill_core::domain::UserProfile;
use quill_core::domain::pagination::USER_SEARCH_LIMIT;
use quill_core::domain::search::SearchPattern;
use quill_core::error::DomainError;
use quill_shared::dto::{GetProfileRequest, SearchUsersRequest, UsersResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /search-users
pub async fn search_users(
    state: web::Data<AppState>,
    body: web::Json<SearchUsersRequest>,
) -> AppResult<HttpResponse> {
    let pattern = SearchPattern::contains(&body.query);
    let users = state
        .users
        .search_by_username(&pattern, USER_SEARCH_LIMIT)
        .await?;

    Ok(HttpResponse::Ok().json(UsersResponse { users }))
}

/// POST /get-profile
pub async fn get_profile(
    state: web::Data<AppState>,
    body: web::Json<GetProfileRequest>,
) -> AppResult<HttpResponse> {
    let username = body.into_inner().username;

    let Some(user) = state.users.find_by_username(&username).await? else {
        return Err(DomainError::NotFound {
            entity_type: "User",
            key: username,
        }
        .into());
    };

    Ok(HttpResponse::Ok().json(UserProfile::from(user)))
}
