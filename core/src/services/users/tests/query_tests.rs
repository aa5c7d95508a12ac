//! Unit tests for the list query engine

use bl_shared::types::Pagination;

use crate::domain::entities::User;
use crate::errors::DomainError;
use crate::services::users::query::{self, SearchFilter, SortSpec};

fn user(name: &str, email: &str) -> User {
    User::new(name.to_string(), email.to_string(), "hash".to_string())
}

fn sample_users() -> Vec<User> {
    vec![
        user("Anna", "a@x"),
        user("Bob", "c@x"),
        user("Candice", "b@x"),
    ]
}

fn page(n: u32, size: u32) -> Pagination {
    Pagination::new(n, size)
}

#[test]
fn filter_matches_substring_case_insensitively() {
    let users = vec![user("Anna", "anna@x"), user("Bob", "bob@x")];
    let result = query::list(users, "name:an", "", page(1, 10)).unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(result.data[0].name, "Anna");
}

#[test]
fn malformed_search_matches_everything() {
    for expr in ["", "noseparator", ":empty-field", "name:", "shoe_size:9"] {
        let result = query::list(sample_users(), expr, "", page(1, 10)).unwrap();
        assert_eq!(result.count, 3, "expression {:?} should not filter", expr);
    }
}

#[test]
fn sort_descending_by_email() {
    let result = query::list(sample_users(), "", "email:desc", page(1, 10)).unwrap();
    let emails: Vec<&str> = result.data.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, ["c@x", "b@x", "a@x"]);
}

#[test]
fn sort_ascending_by_name() {
    let result = query::list(sample_users(), "", "name:asc", page(1, 10)).unwrap();
    let names: Vec<&str> = result.data.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Anna", "Bob", "Candice"]);
}

#[test]
fn empty_sort_preserves_store_order() {
    let result = query::list(sample_users(), "", "", page(1, 10)).unwrap();
    let emails: Vec<&str> = result.data.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, ["a@x", "c@x", "b@x"]);
}

#[test]
fn invalid_sort_order_aborts_the_call() {
    let users = sample_users();
    let err = query::list(users, "", "email:sideways", page(1, 10)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidSort { .. }));
}

#[test]
fn unknown_sort_field_is_rejected() {
    let err = query::list(sample_users(), "", "password_hash:asc", page(1, 10)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidSort { .. }));

    let err = query::list(sample_users(), "", "email", page(1, 10)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidSort { .. }));
}

#[test]
fn invalid_sort_leaves_source_untouched() {
    // The parse failure happens before any filtering or sorting; the same
    // collection then lists cleanly in its original order.
    let users = sample_users();
    let snapshot: Vec<String> = users.iter().map(|u| u.email.clone()).collect();

    assert!(query::list(users.clone(), "", "email:sideways", page(1, 10)).is_err());

    let after: Vec<String> = users.iter().map(|u| u.email.clone()).collect();
    assert_eq!(snapshot, after);
}

#[test]
fn filters_compose_with_sort_and_pagination() {
    let users = vec![
        user("Anna", "anna@x"),
        user("Brian", "brian@x"),
        user("Ariana", "ariana@x"),
        user("Adrian", "adrian@x"),
        user("Zoe", "zoe@x"),
        user("Riana", "riana@x"),
    ];

    // "an" matches all but Zoe; sorted by name ascending; page 2 of size 2.
    let result = query::list(users, "name:an", "name:asc", page(2, 2)).unwrap();
    assert_eq!(result.total, 5);
    assert_eq!(result.total_pages, 3);
    let names: Vec<&str> = result.data.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Ariana", "Brian"]);
}

#[test]
fn pagination_splits_filtered_set() {
    let users: Vec<User> = (0..5)
        .map(|i| user(&format!("User{}", i), &format!("u{}@x", i)))
        .collect();

    let sizes: Vec<usize> = (1..=3)
        .map(|n| {
            query::list(users.clone(), "", "", page(n, 2))
                .unwrap()
                .count
        })
        .collect();
    assert_eq!(sizes, [2, 2, 1]);

    let page1 = query::list(users.clone(), "", "", page(1, 2)).unwrap();
    assert!(page1.has_next_page && !page1.has_previous_page);
    assert_eq!(page1.total_pages, 3);

    let page2 = query::list(users.clone(), "", "", page(2, 2)).unwrap();
    assert!(page2.has_next_page && page2.has_previous_page);

    let page3 = query::list(users, "", "", page(3, 2)).unwrap();
    assert!(!page3.has_next_page && page3.has_previous_page);
}

#[test]
fn projection_exposes_only_safe_fields() {
    let result = query::list(sample_users(), "", "", page(1, 10)).unwrap();
    let json = serde_json::to_value(&result.data[0]).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys.len(), 3);
    for key in ["id", "name", "email"] {
        assert!(keys.contains(&key));
    }
}

#[test]
fn search_filter_parse_rules() {
    assert!(SearchFilter::parse("name:an").is_some());
    assert!(SearchFilter::parse("name").is_none());
    assert!(SearchFilter::parse(":an").is_none());
    assert!(SearchFilter::parse("name:").is_none());
    assert!(SearchFilter::parse("unknown:an").is_none());
}

#[test]
fn sort_spec_parse_rules() {
    assert!(SortSpec::parse("").unwrap().is_none());
    assert!(SortSpec::parse("email:asc").unwrap().is_some());
    assert!(SortSpec::parse("email:desc").unwrap().is_some());
    assert!(SortSpec::parse("email:ASC").is_err());
    assert!(SortSpec::parse("email:sideways").is_err());
}
