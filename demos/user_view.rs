//! Example: Presenting User Records with Presentify
//!
//! This example walks typed user records through the full presenter
//! pipeline: declare attribute maps, wrap source records, resolve
//! attributes, and serialize single and bulk JSON views.

use presentify::prelude::*;
use serde::Serialize;

// =============================================================================
// SOURCE RECORDS - What the storage layer hands us
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub email: String,
    pub city: String,
    pub timezone: String,
}

/// A raw user record, sensitive fields included.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub profile: Profile,
}

impl User {
    fn new(username: &str, first: &str, last: &str, email: &str, city: &str, tz: &str) -> Self {
        Self {
            username: username.to_string(),
            password_hash: "c0ffee".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            profile: Profile {
                email: email.to_string(),
                city: city.to_string(),
                timezone: tz.to_string(),
            },
        }
    }
}

// =============================================================================
// VIEW DECLARATIONS - One marker type per view
// =============================================================================

/// The public JSON view of a user.
pub struct UserPresenter;

impl Present for UserPresenter {
    fn attribute_map() -> AttributeMap {
        AttributeMap::builder()
            .path("name", "username")
            .path("email", "profile.email")
            .path("city", "profile.city")
            .path("phone", "profile.phone") // absent in the source, presents as null
            .derived("full_name", |model| {
                let first = model
                    .path("first_name")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                let last = model
                    .path("last_name")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                Ok(json!(format!("{} {}", first, last)))
            })
            .build()
    }
}

/// A compact view for list endpoints.
pub struct UserSummaryPresenter;

impl Present for UserSummaryPresenter {
    fn attribute_map() -> AttributeMap {
        AttributeMap::builder()
            .path("name", "username")
            .derived("location", |model| {
                let city = model
                    .path("profile.city")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                let tz = model
                    .path("profile.timezone")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                Ok(json!(format!("{} ({})", city, tz)))
            })
            .build()
    }
}

// =============================================================================
// MAIN - Usage demonstration
// =============================================================================

fn main() -> Result<(), PresentifyError> {
    println!("=== Presentify User View Example ===\n");

    let users = vec![
        User::new(
            "anna",
            "Anna",
            "Petrenko",
            "anna@example.com",
            "Kyiv",
            "EET",
        ),
        User::new(
            "boris",
            "Boris",
            "Danyliv",
            "boris@example.com",
            "Lviv",
            "EET",
        ),
        User::new(
            "clara",
            "Clara",
            "Moroz",
            "clara@example.com",
            "Odesa",
            "EET",
        ),
    ];

    // Present a single record through the public view
    let presenter = UserPresenter::present(&users[0])?;
    println!("Single view:");
    println!("{}\n", presenter.to_json_pretty()?);

    // Attribute access is strict
    println!("name      -> {}", presenter.get("name")?);
    println!("full_name -> {}", presenter.get("full_name")?);
    println!("phone     -> {}", presenter.get("phone")?);
    if let Err(err) = presenter.get("password_hash") {
        println!("password_hash -> error: {}", err);
    }

    // ... and read-only
    if let Err(err) = presenter.set("name", json!("mallory")) {
        println!("set(\"name\") -> error: {}\n", err);
    }

    // Present the whole collection through the summary view
    let summaries = users.present::<UserSummaryPresenter>()?;
    println!("List view ({} rows):", summaries.len());
    println!("{}\n", summaries.to_json_pretty()?);

    println!("=== Surface Summary ===");
    println!("Model:        validated wrapper around the source record");
    println!("AttributeMap: ordered declarations of paths and derivations");
    println!("Presenter:    strict, read-only attribute resolution");
    println!("Present:      per-view declaration trait (marker types)");
    println!("Presented:    ordered collection of presenters");

    Ok(())
}
