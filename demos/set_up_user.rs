//! Set up a user - named, optional arguments example.
//!
//! This example demonstrates:
//! - Passing a small serializable struct as a bag of optional arguments
//! - Picking out the values with typed handlers
//! - Passing an ad-hoc `json!` object with differently-cased names
//!
//! ```text
//! cargo run --example set_up_user
//! ```

use argreflect::Reflect;
use serde::Serialize;
use serde_json::json;

/// The options `set_up_user` understands. Unset fields are left out.
#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct UserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_citizen: Option<bool>,
}

#[derive(Debug)]
struct User {
    first_name: String,
    email: String,
    is_citizen: bool,
}

fn set_up_user<O: Serialize>(options: &O) -> argreflect::Result<User> {
    // Defaults
    let mut user = User {
        first_name: "some first name".to_string(),
        email: "some email address".to_string(),
        is_citizen: false,
    };
    let User {
        first_name,
        email,
        is_citizen,
    } = &mut user;

    options.reflect_with(move |prop| {
        prop.named("firstname", move |v: String| *first_name = v)
            .named("email", move |v: String| *email = v)
            .named("iscitizen", move |v: bool| *is_citizen = v);
    })?;

    Ok(user)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let user = set_up_user(&UserOptions {
        email: Some("email@email.com".to_string()),
        is_citizen: Some(false),
        ..Default::default()
    })?;
    println!("{:?}", user);

    let user = set_up_user(&json!({ "FirstName": "John", "IsCitizen": true }))?;
    println!("{:?}", user);

    Ok(())
}
