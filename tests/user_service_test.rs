//! User service tests against an in-memory repository.

mod common;

use std::sync::Arc;

use common::{manager, user, InMemoryUserRepository};
use user_management::domain::{CreateUser, Password, UpdateUser};
use user_management::errors::AppError;
use user_management::infra::UserRepository;
use user_management::services::UserService;
use user_management::types::PaginationParams;

fn create_input(email: &str) -> CreateUser {
    CreateUser {
        name: "Jane".to_string(),
        surname: "Doe".to_string(),
        email: email.to_string(),
        password: "x".to_string(),
    }
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = manager(repo.clone());

    let id = service.create_user(create_input("a@b.com")).await.unwrap();
    let stored = service.get_user(&id).await.unwrap();

    assert_eq!(stored.id, id);
    assert_eq!(stored.name, "Jane");
    assert_eq!(stored.surname, "Doe");
    assert_eq!(stored.email, "a@b.com");
    assert!(Password::from_hash(stored.password).verify("x"));
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = manager(repo.clone());

    service.create_user(create_input("a@b.com")).await.unwrap();
    let second = service.create_user(create_input("a@b.com")).await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_concurrent_duplicate_creates_admit_one() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = manager(repo.clone());

    let (first, second) = tokio::join!(
        service.create_user(create_input("race@b.com")),
        service.create_user(create_input("race@b.com")),
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!([first, second]
        .into_iter()
        .any(|r| matches!(r, Err(AppError::Conflict(_)))));
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_list_respects_order_and_bounds() {
    let repo = Arc::new(InMemoryUserRepository::default());
    for id in ["3", "1", "2"] {
        repo.create(user(id, &format!("{}@b.com", id))).await.unwrap();
    }
    let service = manager(repo);

    let page = service
        .list_users(PaginationParams::new(Some("2"), Some("1")))
        .await
        .unwrap();

    let ids: Vec<_> = page.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, ["2", "3"]);
}

#[tokio::test]
async fn test_list_out_of_range_is_empty() {
    let repo = Arc::new(InMemoryUserRepository::default());
    repo.create(user("1", "1@b.com")).await.unwrap();
    let service = manager(repo);

    let page = service
        .list_users(PaginationParams::new(None, Some("5")))
        .await
        .unwrap();

    assert!(page.is_empty());
}

#[tokio::test]
async fn test_update_never_touches_id_or_password() {
    let repo = Arc::new(InMemoryUserRepository::default());
    repo.create(user("1", "old@b.com")).await.unwrap();
    let service = manager(repo.clone());

    service
        .update_user(
            "1",
            UpdateUser {
                name: String::new(),
                surname: "New".to_string(),
                email: "new@b.com".to_string(),
            },
        )
        .await
        .unwrap();

    let stored = repo.find_by_id("1").await.unwrap().unwrap();
    assert_eq!(stored.id, "1");
    assert_eq!(stored.password, "stored-hash");
    assert_eq!(stored.name, "");
    assert_eq!(stored.surname, "New");
    assert_eq!(stored.email, "new@b.com");
}

#[tokio::test]
async fn test_update_keeping_own_email_is_allowed() {
    let repo = Arc::new(InMemoryUserRepository::default());
    repo.create(user("1", "same@b.com")).await.unwrap();
    let service = manager(repo);

    let result = service
        .update_user(
            "1",
            UpdateUser {
                name: "Renamed".to_string(),
                surname: String::new(),
                email: "same@b.com".to_string(),
            },
        )
        .await;

    assert_eq!(result.unwrap(), "1");
}

#[tokio::test]
async fn test_update_password_never_touches_profile() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let original = user("1", "a@b.com");
    repo.create(original.clone()).await.unwrap();
    let service = manager(repo.clone());

    service
        .update_password("1", "1Password.".to_string())
        .await
        .unwrap();

    let stored = repo.find_by_id("1").await.unwrap().unwrap();
    assert_eq!(stored.name, original.name);
    assert_eq!(stored.surname, original.surname);
    assert_eq!(stored.email, original.email);
    assert!(Password::from_hash(stored.password).verify("1Password."));
}

#[tokio::test]
async fn test_delete_then_get_is_absent() {
    let repo = Arc::new(InMemoryUserRepository::default());
    repo.create(user("1", "a@b.com")).await.unwrap();
    let service = manager(repo.clone());

    service.delete_user("1").await.unwrap();

    assert!(repo.find_by_id("1").await.unwrap().is_none());
    assert!(matches!(
        service.get_user("1").await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_lookups_report_absence_not_error() {
    let repo = InMemoryUserRepository::default();

    assert!(repo.find_by_id("nope").await.unwrap().is_none());
    assert!(repo.find_by_email("nope@b.com").await.unwrap().is_none());
}
