//! Register Use Case
//!
//! Creates a new user account and dispatches a welcome mail.

use std::sync::Arc;

use platform::mail::MailSender;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{User, UserProfile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i16,
    pub country: String,
    pub gender: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_name: String,
}

/// Register use case
pub struct RegisterUseCase<U, M>
where
    U: UserRepository,
    M: MailSender + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    mailer: Arc<M>,
    config: Arc<AuthConfig>,
}

impl<U, M> RegisterUseCase<U, M>
where
    U: UserRepository,
    M: MailSender + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, mailer: Arc<M>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            mailer,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate user name
        let user_name = UserName::new(input.user_name, None)
            .map_err(|e| AuthError::InvalidUserName(e.to_string()))?;

        // Validate email
        let email = Email::new(input.email)
            .map_err(|e| AuthError::InvalidEmail(e.message().to_string()))?;

        // Validate password against the registration policy, then hash
        let password = ClearTextPassword::new_for_registration(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Fast-path duplicate check. The unique index on the canonical
        // user name in the store is still the authoritative guard; a
        // racing insert surfaces as UserNameTaken from create().
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let user = User::new(
            user_name,
            email,
            password_hash,
            UserProfile {
                first_name: input.first_name,
                last_name: input.last_name,
                age: input.age,
                country: input.country,
                gender: input.gender,
            },
        );

        self.user_repo.create(&user).await?;

        tracing::info!(
            user_name = %user.user_name,
            "User registered"
        );

        // Welcome mail is fire-and-forget: a mail failure never rolls
        // back the created account.
        let mailer = Arc::clone(&self.mailer);
        let recipient = user.email.as_str().to_string();
        tokio::spawn(async move {
            if let Err(e) = mailer
                .send(
                    &recipient,
                    "Welcome to Car Hub",
                    "Thank you for choosing us!",
                )
                .await
            {
                tracing::warn!(error = %e, "Failed to send welcome mail");
            }
        });

        Ok(RegisterOutput {
            user_name: user.user_name.original().to_string(),
        })
    }
}
