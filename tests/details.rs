mod common;

use repo_search::details::{RepositoryDetails, RepositoryRow, UserDetails, CORRUPTED_DATE};
use repo_search::models::User;

#[test]
fn test_repository_row() {
    let repository = common::repository(7, 120, 8, "2023-02-26T10:00:00Z");
    let row = RepositoryRow::from(&repository);

    assert_eq!(row.id, 7);
    assert_eq!(row.title, "repo-7");
    assert_eq!(row.author, "owner");
    assert_eq!(row.stars, "Stars: 120");
    assert_eq!(row.watchers, "Watchers: 120");
    assert_eq!(row.forks, "Forks: 8");
    assert_eq!(row.issues, "Open issues: 1");
}

#[test]
fn test_repository_details_fields() {
    let repository = common::repository(7, 120, 8, "2023-02-26T10:00:00Z");
    let details = RepositoryDetails::from(&repository);

    let titles: Vec<_> = details.info.iter().map(|f| f.title).collect();
    assert_eq!(
        titles,
        vec!["Name", "Author", "Forks", "Watchers", "Open issues", "Stars"]
    );
    assert_eq!(details.info[2].value, "8");
    assert_eq!(details.info[5].value, "120");

    assert_eq!(details.dates[0].title, "Last update");
    assert_eq!(details.dates[0].value, "26.02.2023");
    assert_eq!(details.dates[1].title, "Created at");
    assert_eq!(details.dates[1].value, "01.01.2020");

    assert_eq!(details.owner.url, "https://api.github.com/users/owner");
    assert_eq!(details.repository_url, "https://github.com/owner/repo-7");
}

#[test]
fn test_repository_details_corrupted_date() {
    let repository = common::repository(1, 0, 0, "26/02/2023");
    let details = RepositoryDetails::from(&repository);

    assert_eq!(details.dates[0].value, CORRUPTED_DATE);
    assert!(details.to_string().contains("Last update: Corrupted date"));
}

#[test]
fn test_user_details_no_info() {
    let user = User {
        id: 42,
        login: "octocat".to_string(),
        avatar_url: "https://avatars.githubusercontent.com/u/42".to_string(),
        html_url: "https://github.com/octocat".to_string(),
        bio: None,
        location: Some(String::new()),
        name: Some("The Octocat".to_string()),
        followers: 3,
    };

    let details = UserDetails::from(&user);
    let rendered: Vec<String> = details.info.iter().map(|f| f.to_string()).collect();

    assert_eq!(
        rendered,
        vec![
            "Name: The Octocat",
            "Bio: No info",
            "Login id: octocat",
            "Location: No info",
            "Followers: 3",
            "User id: 42",
        ]
    );
    assert_eq!(details.profile_url, "https://github.com/octocat");
    assert!(details.to_string().ends_with("Git profile: https://github.com/octocat"));
}
