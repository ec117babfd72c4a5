use std::fmt::Display;

use super::RepositoryId;

/// A client-side route derived from a path string.
///
/// Any path that is neither the root nor a well-formed detail path falls back
/// to the list route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// The repository list, at the root path.
    #[default]
    List,

    /// The detail page of a single repository.
    Detail {
        /// The identifier extracted from the path.
        id: RepositoryId,
    },
}

impl Route {
    /// Resolves a path to its route.
    pub fn parse(path: &str) -> Self {
        match path.strip_prefix("/repository/") {
            Some(rest) => match rest.parse::<u64>() {
                Ok(id) => Route::Detail {
                    id: RepositoryId(id),
                },
                Err(_) => Route::List,
            },
            None => Route::List,
        }
    }

    /// The path string that navigates to this route.
    pub fn to_path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail { id } => format!("/repository/{id}"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_root_path() {
        assert_eq!(Route::List, Route::parse("/"));
    }

    #[test]
    fn parse_detail_path() {
        assert_eq!(
            Route::Detail {
                id: RepositoryId(7)
            },
            Route::parse("/repository/7")
        );
    }

    #[test]
    fn parse_unknown_path_falls_back_to_list() {
        assert_eq!(Route::List, Route::parse("/settings"));
        assert_eq!(Route::List, Route::parse(""));
        assert_eq!(Route::List, Route::parse("/repository"));
        assert_eq!(Route::List, Route::parse("/repository/"));
    }

    #[test]
    fn parse_non_numeric_id_falls_back_to_list() {
        assert_eq!(Route::List, Route::parse("/repository/abc"));
        assert_eq!(Route::List, Route::parse("/repository/7/extra"));
    }

    #[test]
    fn to_path_is_the_inverse_of_parse() {
        assert_eq!("/", Route::List.to_path());
        assert_eq!(
            "/repository/7",
            Route::Detail {
                id: RepositoryId(7)
            }
            .to_path()
        );
        for route in [
            Route::List,
            Route::Detail {
                id: RepositoryId(42),
            },
        ] {
            assert_eq!(route, Route::parse(&route.to_path()));
        }
    }
}
