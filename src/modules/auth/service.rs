use shopfront_auth::{EmailTokenPayload, JwtAdapter, UserTokenPayload};
use shopfront_core::{AppError, hash_password, verify_password};
use shopfront_db::{DbError, UserRepository};
use shopfront_models::{AuthResponse, LoginUserDto, RegisterUserDto, User};
use shopfront_observability::{
    LoginOutcome, track_jwt_issued, track_user_login, track_user_registered,
};
use tracing::instrument;

use crate::utils::email::EmailService;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    /// Creates the account, mails a validation link and returns a session token.
    #[instrument(skip(users, jwt, email, dto), fields(email = %dto.email))]
    pub async fn register_user(
        users: &dyn UserRepository,
        jwt: &JwtAdapter,
        email: &EmailService,
        dto: RegisterUserDto,
    ) -> Result<AuthResponse, AppError> {
        let existing = users
            .find_by_email(&dto.email)
            .await
            .map_err(DbError::into_app_error)?;
        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!("Email already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;
        let user = users
            .create(User::new(dto.name, dto.email, hashed_password))
            .await
            .map_err(DbError::into_app_error)?;
        track_user_registered();

        Self::send_validation_link(jwt, email, &user).await;

        let token = Self::session_token(jwt, &user)?;

        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    #[instrument(skip(users, jwt, dto), fields(email = %dto.email))]
    pub async fn login_user(
        users: &dyn UserRepository,
        jwt: &JwtAdapter,
        dto: LoginUserDto,
    ) -> Result<AuthResponse, AppError> {
        let Some(user) = users
            .find_by_email(&dto.email)
            .await
            .map_err(DbError::into_app_error)?
        else {
            track_user_login(LoginOutcome::UnknownEmail);
            return Err(AppError::bad_request(anyhow::anyhow!(INVALID_CREDENTIALS)));
        };

        if !verify_password(&dto.password, &user.password) {
            track_user_login(LoginOutcome::WrongPassword);
            return Err(AppError::bad_request(anyhow::anyhow!(INVALID_CREDENTIALS)));
        }

        let token = Self::session_token(jwt, &user)?;
        track_user_login(LoginOutcome::Success);

        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    /// Marks the address carried by an e-mail token as validated.
    #[instrument(skip_all)]
    pub async fn validate_email(
        users: &dyn UserRepository,
        jwt: &JwtAdapter,
        token: &str,
    ) -> Result<(), AppError> {
        let payload: EmailTokenPayload = jwt
            .validate_token(token)
            .filter(EmailTokenPayload::is_email_validation)
            .ok_or_else(|| AppError::unauthorized("Invalid token".to_string()))?;

        let email = payload
            .email
            .ok_or_else(|| AppError::internal_error("Email not in token".to_string()))?;

        let updated = users
            .mark_email_validated(&email)
            .await
            .map_err(DbError::into_app_error)?;
        if !updated {
            return Err(AppError::bad_request(anyhow::anyhow!("Email not exists")));
        }

        tracing::info!(email = %email, "Email validated");
        Ok(())
    }

    fn session_token(jwt: &JwtAdapter, user: &User) -> Result<String, AppError> {
        let payload = UserTokenPayload {
            id: user.id.to_hex(),
            email: user.email.clone(),
        };
        let token = jwt
            .generate_default(&payload)
            .ok_or_else(|| AppError::internal_error("Error generating token".to_string()))?;
        track_jwt_issued();
        Ok(token)
    }

    /// Delivery problems are logged; registration still succeeds.
    async fn send_validation_link(jwt: &JwtAdapter, email: &EmailService, user: &User) {
        let Some(token) = jwt.generate_default(&EmailTokenPayload::new(&user.email)) else {
            tracing::warn!(user_id = %user.id, "Could not sign email validation token");
            return;
        };

        if let Err(e) = email
            .send_validation_email(&user.email, &user.name, &token)
            .await
        {
            tracing::warn!(user_id = %user.id, error = %e.message(), "Validation email not sent");
        }
    }
}
