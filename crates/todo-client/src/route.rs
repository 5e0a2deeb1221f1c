//! Hash Routes
//!
//! Client-visible pages addressed through `location.hash`.

/// A page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Checkout gate
    #[default]
    Home,
    Login,
    Register,
    /// Protected to-do page
    Todo,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Todo => "/todo",
        }
    }

    pub fn to_hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Parse `#/todo`, `/todo` or `todo`; anything unknown is Home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.split(['?', '#']).next().unwrap_or("").trim_end_matches('/');
        match path {
            "login" => Route::Login,
            "register" => Route::Register,
            "todo" => Route::Todo,
            _ => Route::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_round_trip() {
        for route in [Route::Home, Route::Login, Route::Register, Route::Todo] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_unknown_and_empty_hash_is_home() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#/nope"), Route::Home);
        assert_eq!(Route::from_hash("#/todo/?tab=1"), Route::Todo);
    }
}
