#![allow(dead_code)]

use repo_search::models::{OwnerUser, Repository};
use serde_json::{json, Value};

pub fn owner(login: &str) -> OwnerUser {
    OwnerUser {
        login: login.to_string(),
        avatar_url: format!("https://avatars.githubusercontent.com/{}", login),
        url: format!("https://api.github.com/users/{}", login),
    }
}

pub fn repository(id: u64, stars: u32, forks: u32, updated_at: &str) -> Repository {
    Repository {
        id,
        name: format!("repo-{}", id),
        full_name: Some(format!("owner/repo-{}", id)),
        description: None,
        owner: owner("owner"),
        watchers_count: stars,
        forks_count: forks,
        open_issues_count: 1,
        html_url: format!("https://github.com/owner/repo-{}", id),
        updated_at: updated_at.to_string(),
        stargazers_count: stars,
        created_at: "2020-01-01T00:00:00Z".to_string(),
        language: Some("Rust".to_string()),
    }
}

pub fn repository_json(id: u64, stars: u32, forks: u32, updated_at: &str) -> Value {
    json!({
        "id": id,
        "name": format!("repo-{}", id),
        "full_name": format!("owner/repo-{}", id),
        "description": null,
        "owner": {
            "login": "owner",
            "id": 1,
            "avatar_url": "https://avatars.githubusercontent.com/u/1",
            "url": "https://api.github.com/users/owner",
            "html_url": "https://github.com/owner"
        },
        "watchers_count": stars,
        "forks_count": forks,
        "open_issues_count": 3,
        "html_url": format!("https://github.com/owner/repo-{}", id),
        "updated_at": updated_at,
        "stargazers_count": stars,
        "created_at": "2020-01-01T00:00:00Z",
        "language": "Rust",
        "private": false
    })
}

pub fn search_response_json(items: Vec<Value>) -> Value {
    json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items
    })
}

pub fn user_json(login: &str) -> Value {
    json!({
        "login": login,
        "id": 9919,
        "avatar_url": "https://avatars.githubusercontent.com/u/9919",
        "url": format!("https://api.github.com/users/{}", login),
        "html_url": format!("https://github.com/{}", login),
        "name": "GitHub",
        "bio": "How people build software.",
        "location": "San Francisco, CA",
        "followers": 60000,
        "type": "Organization"
    })
}
