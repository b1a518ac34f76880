//! Client route table
//!
//! - `/` redirects to `/meetings`
//! - `/meetings` lists meetings
//! - `/meetings/new` creates a meeting
//! - `/meetings/:id` shows one meeting

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    MeetingList,
    MeetingCreate,
    MeetingDetail(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route matches '{0}'")]
    NotFound(String),
}

impl Route {
    /// Resolve a path, following the `/` redirect
    pub fn resolve(path: &str) -> Result<Route, RouteError> {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::MeetingList),
            ["meetings"] => Ok(Route::MeetingList),
            ["meetings", "new"] => Ok(Route::MeetingCreate),
            ["meetings", id] => Ok(Route::MeetingDetail((*id).to_string())),
            _ => Err(RouteError::NotFound(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::MeetingList => "/meetings".to_string(),
            Route::MeetingCreate => "/meetings/new".to_string(),
            Route::MeetingDetail(id) => format!("/meetings/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::resolve(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_list() {
        assert_eq!(Route::resolve("/").unwrap(), Route::MeetingList);
        assert_eq!(Route::resolve("").unwrap(), Route::MeetingList);
    }

    #[test]
    fn test_new_wins_over_id() {
        assert_eq!(Route::resolve("/meetings/new").unwrap(), Route::MeetingCreate);
        assert_eq!(
            Route::resolve("/meetings/3f2a/").unwrap(),
            Route::MeetingDetail("3f2a".to_string())
        );
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(
            Route::resolve("/settings"),
            Err(RouteError::NotFound("/settings".to_string()))
        );
        assert!("/meetings/1/edit".parse::<Route>().is_err());
    }

    #[test]
    fn test_path_round_trip() {
        let route = Route::MeetingDetail("abc".to_string());
        assert_eq!(route.to_string(), "/meetings/abc");
        assert_eq!(Route::resolve(&route.path()).unwrap(), route);
    }
}
