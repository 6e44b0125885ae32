//! PostgreSQL repository tests
//!
//! Run against the database in `DATABASE_URL`. Skipped when it is unset.

use auth::AuthError;
use auth::domain::entity::user::NewUser;
use auth::domain::repository::UserRepository;
use auth::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use auth::infra::postgres::PgUserRepository;
use sqlx::postgres::PgPoolOptions;

async fn repository() -> Option<PgUserRepository> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .unwrap();

    Some(PgUserRepository::new(pool))
}

fn unique_email() -> String {
    format!("{}@test.local", uuid::Uuid::new_v4())
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        user_name: UserName::new("Ana").unwrap(),
        email: Email::new(email).unwrap(),
        password_hash: UserPassword::from_db("$2b$04$placeholder"),
    }
}

#[tokio::test]
async fn create_and_find() {
    let Some(repo) = repository().await else {
        return;
    };
    let email = unique_email();

    let user = repo.create(&new_user(&email)).await.unwrap();
    assert_eq!(user.email.as_str(), email);

    let by_id = repo.find_by_id(&user.user_id).await.unwrap().unwrap();
    assert_eq!(by_id.user_name.as_str(), "Ana");
    assert_eq!(by_id.password_hash.as_str(), "$2b$04$placeholder");

    let by_email = repo.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(by_email.user_id, user.user_id);

    assert!(repo.exists_by_email(&Email::new(&email).unwrap()).await.unwrap());
}

#[tokio::test]
async fn duplicate_email_maps_to_email_taken() {
    let Some(repo) = repository().await else {
        return;
    };
    let email = unique_email();

    repo.create(&new_user(&email)).await.unwrap();
    let result = repo.create(&new_user(&email)).await;
    assert!(matches!(result, Err(AuthError::EmailTaken)));
}

#[tokio::test]
async fn missing_rows() {
    let Some(repo) = repository().await else {
        return;
    };

    assert!(repo.find_by_id(&UserId::new()).await.unwrap().is_none());
    assert!(repo.find_by_email(&unique_email()).await.unwrap().is_none());
}
