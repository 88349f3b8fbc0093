//! Sign-up and sign-in.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use quill_core::domain::User;
use quill_core::domain::identifiers::{disambiguate_username, username_from_email};
use quill_core::domain::validation::validate_signup;
use quill_core::ports::{BaseRepository, PasswordService, TokenService};
use quill_shared::dto::{AuthResponse, SignInRequest, SignUpRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn auth_response(user: &User, tokens: &dyn TokenService) -> AppResult<AuthResponse> {
    Ok(AuthResponse {
        access_token: tokens.generate_token(user.id)?,
        profile_img: user.personal_info.profile_img.clone(),
        username: user.personal_info.username.clone(),
        fullname: user.personal_info.fullname.clone(),
    })
}

/// POST /signup
pub async fn signup(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SignUpRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate_signup(&req.fullname, &req.email, &req.password)?;

    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Internal("Email already exists".to_string()));
    }

    let mut username = username_from_email(&req.email);
    if state.users.find_by_username(&username).await?.is_some() {
        username = disambiguate_username(&username);
    }

    let password_hash = password_service.hash(&req.password)?;

    let user = state
        .users
        .insert(User::new(req.fullname, req.email, password_hash, username))
        .await?;

    tracing::info!(user_id = %user.id, username = %user.personal_info.username, "User signed up");

    Ok(HttpResponse::Ok().json(auth_response(&user, token_service.get_ref().as_ref())?))
}

/// POST /signin
pub async fn signin(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SignInRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::Forbidden("Email not found".to_string()))?;

    let password_hash = match (&user.personal_info.password, user.google_auth) {
        (Some(hash), false) => hash,
        _ => {
            return Err(AppError::Forbidden(
                "Account was created using google. Try logging in with google.".to_string(),
            ));
        }
    };

    if !password_service.verify(&req.password, password_hash)? {
        return Err(AppError::Forbidden("Incorrect password".to_string()));
    }

    Ok(HttpResponse::Ok().json(auth_response(&user, token_service.get_ref().as_ref())?))
}
