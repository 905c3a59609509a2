use std::str::FromStr;
use studyflow::ui::core::{Action, Route};

#[test]
fn test_route_paths() {
    assert_eq!(Route::default(), Route::Tasks);
    assert_eq!(Route::Tasks.path(), "/");
    assert_eq!(Route::Contact.to_string(), "/contact");

    let paths: Vec<&str> = Route::ALL.iter().map(|r| r.path()).collect();
    assert_eq!(paths, vec!["/", "/calendar", "/analytics", "/about", "/contact"]);
}

#[test]
fn test_route_from_str() {
    assert_eq!(Route::from_str("calendar"), Ok(Route::Calendar));
    assert_eq!(Route::from_str("/analytics"), Ok(Route::Analytics));
    assert_eq!(Route::from_str("  About "), Ok(Route::About));
    assert_eq!(Route::from_str("/"), Ok(Route::Tasks));
    assert!(Route::from_str("/settings").is_err());
}

#[test]
fn test_route_cycling_wraps() {
    assert_eq!(Route::Contact.next(), Route::Tasks);
    assert_eq!(Route::Tasks.previous(), Route::Contact);
    assert_eq!(Route::Calendar.index(), 1);
}

#[test]
fn test_action_debug() {
    // Actions are logged with their debug form
    let action = Action::Navigate(Route::About);
    assert_eq!(format!("{:?}", action), "Navigate(About)");
}
