//! Auth flow tests: register, login, logout against in-memory fakes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use platform::mail::{MailError, MailSender};

use crate::application::{
    AuthConfig, CheckSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput,
    RegisterUseCase,
};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};
use crate::infra::memory::InMemorySessionStore;

#[derive(Default)]
struct MemUserRepo {
    users: RwLock<HashMap<String, User>>,
}

impl MemUserRepo {
    fn len(&self) -> usize {
        self.users.read().unwrap().len()
    }
}

impl UserRepository for MemUserRepo {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().unwrap();
        if users.contains_key(user.user_name.canonical()) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(user.user_name.canonical().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self.users.read().unwrap().get(user_name.canonical()).cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self.users.read().unwrap().contains_key(user_name.canonical()))
    }
}

/// Always fails, for asserting that mail never blocks registration.
struct FailingMailer;

impl MailSender for FailingMailer {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), MailError> {
        Err(MailError::TransportFailed("connection refused".to_string()))
    }
}

fn register_input(user_name: &str) -> RegisterInput {
    RegisterInput {
        user_name: user_name.to_string(),
        email: format!("{}@example.com", user_name.to_lowercase()),
        password: "Str0ng!Pass".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        age: 30,
        country: "Portugal".to_string(),
        gender: "female".to_string(),
    }
}

fn test_setup() -> (Arc<MemUserRepo>, Arc<InMemorySessionStore>, Arc<AuthConfig>) {
    (
        Arc::new(MemUserRepo::default()),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(AuthConfig::development()),
    )
}

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let (users, sessions, config) = test_setup();

    let register = RegisterUseCase::new(users.clone(), Arc::new(FailingMailer), config.clone());
    let registered = register.execute(register_input("Alice")).await.unwrap();
    assert_eq!(registered.user_name, "Alice");

    let login = LoginUseCase::new(users.clone(), sessions.clone(), config.clone());
    let output = login
        .execute(LoginInput {
            user_name: "Alice".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.user_name, "Alice");
    assert!(!output.user_role.is_admin());

    // The issued token resolves to a live session for the canonical name.
    let check = CheckSessionUseCase::new(sessions, config);
    let info = check.execute(&output.session_token).await.unwrap();
    assert_eq!(info.user_name, "alice");
}

#[tokio::test]
async fn test_login_user_name_is_case_insensitive() {
    let (users, sessions, config) = test_setup();

    RegisterUseCase::new(users.clone(), Arc::new(FailingMailer), config.clone())
        .execute(register_input("Alice"))
        .await
        .unwrap();

    let login = LoginUseCase::new(users, sessions, config);
    let output = login
        .execute(LoginInput {
            user_name: "ALICE".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap();

    // Responses carry the name as registered, not as typed.
    assert_eq!(output.user_name, "Alice");
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let (users, _, config) = test_setup();
    let register = RegisterUseCase::new(users.clone(), Arc::new(FailingMailer), config);

    register.execute(register_input("Alice")).await.unwrap();

    // Same canonical name, different case.
    let err = register.execute(register_input("ALICE")).await.unwrap_err();
    assert!(matches!(err, AuthError::UserNameTaken));
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_weak_password_is_rejected() {
    let (users, _, config) = test_setup();
    let register = RegisterUseCase::new(users.clone(), Arc::new(FailingMailer), config);

    let mut input = register_input("Alice");
    input.password = "alllowercase".to_string();

    let err = register.execute(input).await.unwrap_err();
    assert!(matches!(err, AuthError::PasswordValidation(_)));
    assert_eq!(users.len(), 0);
}

#[tokio::test]
async fn test_mail_failure_never_blocks_registration() {
    let (users, _, config) = test_setup();

    let register = RegisterUseCase::new(users.clone(), Arc::new(FailingMailer), config);
    assert!(register.execute(register_input("Alice")).await.is_ok());
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
    let (users, sessions, config) = test_setup();

    RegisterUseCase::new(users.clone(), Arc::new(FailingMailer), config.clone())
        .execute(register_input("Alice"))
        .await
        .unwrap();

    let login = LoginUseCase::new(users, sessions, config);

    let unknown = login
        .execute(LoginInput {
            user_name: "Nobody".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap_err();
    let wrong = login
        .execute(LoginInput {
            user_name: "Alice".to_string(),
            password: "Wr0ng!Pass".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(unknown, AuthError::InvalidCredentials));
    assert!(matches!(wrong, AuthError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_session_status_reports_authentication_state() {
    use crate::presentation::handlers::{AuthAppState, session_status};
    use axum::extract::State;
    use axum::http::{HeaderMap, header};
    use platform::mail::{LogMailer, Mailer};

    let (users, sessions, config) = test_setup();

    RegisterUseCase::new(users.clone(), Arc::new(FailingMailer), config.clone())
        .execute(register_input("Alice"))
        .await
        .unwrap();
    let login = LoginUseCase::new(users.clone(), sessions.clone(), config.clone())
        .execute(LoginInput {
            user_name: "Alice".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap();

    let state = AuthAppState {
        users,
        sessions,
        mailer: Arc::new(Mailer::Log(LogMailer)),
        config: config.clone(),
    };

    // No cookie: anonymous, not an error.
    let body = session_status(State(state.clone()), HeaderMap::new())
        .await
        .unwrap()
        .0;
    assert!(!body.authenticated);
    assert!(body.user_name.is_none());

    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        format!("{}={}", config.session_cookie_name, login.session_token)
            .parse()
            .unwrap(),
    );
    let body = session_status(State(state), headers).await.unwrap().0;
    assert!(body.authenticated);
    assert_eq!(body.user_name.as_deref(), Some("alice"));
    assert_eq!(body.user_role.as_deref(), Some("regular"));
    assert!(body.expires_at_ms.is_some());
}

#[tokio::test]
async fn test_reserved_name_account_can_log_in() {
    use crate::domain::entity::user::UserProfile;
    use crate::domain::value_object::{email::Email, user_role::UserRole};
    use platform::password::ClearTextPassword;

    let (users, sessions, config) = test_setup();

    // Admin accounts are created out-of-band with names registration
    // reserves; build the row directly, as a migration would.
    let password = ClearTextPassword::new("S3cret!Admin".to_string()).unwrap();
    let mut admin = User::new(
        UserName::from_db("admin"),
        Email::new("admin@example.com").unwrap(),
        password.hash(config.pepper()).unwrap(),
        UserProfile {
            first_name: "Ada".to_string(),
            last_name: "Root".to_string(),
            age: 40,
            country: "Portugal".to_string(),
            gender: "female".to_string(),
        },
    );
    admin.user_role = UserRole::Admin;
    users.create(&admin).await.unwrap();

    let output = LoginUseCase::new(users, sessions, config)
        .execute(LoginInput {
            user_name: "Admin".to_string(),
            password: "S3cret!Admin".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.user_name, "admin");
    assert!(output.user_role.is_admin());
}

#[tokio::test]
async fn test_logout_invalidates_the_session() {
    let (users, sessions, config) = test_setup();

    RegisterUseCase::new(users.clone(), Arc::new(FailingMailer), config.clone())
        .execute(register_input("Alice"))
        .await
        .unwrap();

    let login = LoginUseCase::new(users, sessions.clone(), config.clone());
    let output = login
        .execute(LoginInput {
            user_name: "Alice".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap();

    let logout = LogoutUseCase::new(sessions.clone(), config.clone());
    logout.execute(&output.session_token).await.unwrap();

    let check = CheckSessionUseCase::new(sessions.clone(), config.clone());
    assert!(check.execute(&output.session_token).await.is_err());

    // A second logout with the same token stays a no-op.
    let logout = LogoutUseCase::new(sessions, config);
    assert!(logout.execute(&output.session_token).await.is_ok());
}
