//! Tests for the routing table
//!
//! Validates path recognition and parameter parsing.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use shared::models::UserId;
    use yew_router::Routable;

    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Users.to_path(), "/users");
        assert_eq!(MainRoute::UserNew.to_path(), "/users/new");
        assert_eq!(MainRoute::UserEdit { id: UserId(7) }.to_path(), "/users/7");
        assert_eq!(MainRoute::Login.to_path(), "/login");
    }

    #[test]
    fn test_recognize_user_edit() {
        assert_eq!(
            MainRoute::recognize("/users/42"),
            Some(MainRoute::UserEdit { id: UserId(42) })
        );
    }

    #[test]
    fn test_recognize_new_user_before_id() {
        assert_eq!(MainRoute::recognize("/users/new"), Some(MainRoute::UserNew));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(MainRoute::recognize("/nowhere"), Some(MainRoute::NotFound));
    }

    #[test]
    fn test_non_numeric_user_id_is_not_an_edit_route() {
        assert!(!matches!(
            MainRoute::recognize("/users/abc"),
            Some(MainRoute::UserEdit { .. })
        ));
    }
}
