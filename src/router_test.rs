use super::*;
use crate::net::types::User;

fn signed_in(role: &str) -> Session {
    let user = User { id: "u1".to_owned(), name: "Ana".to_owned(), role: Some(role.into()), ..User::default() };
    Session::with_credentials(Some(user), Some("tok".to_owned()))
}

#[test]
fn route_names_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn only_admin_users_is_guarded() {
    let guarded: Vec<_> = ROUTES.iter().filter(|r| r.guard.is_some()).map(|r| r.name).collect();
    assert_eq!(guarded, vec![ADMIN_USERS_ROUTE]);
}

#[test]
fn resolve_path_matches_table() {
    assert_eq!(resolve_path("/").name, AUTH_ROUTE);
    assert_eq!(resolve_path("/admin/departamentos").name, "admin-departments");
    assert_eq!(resolve_path("/admin/usuarios/").name, ADMIN_USERS_ROUTE);
    assert_eq!(resolve_path("/admin/feed?tab=latest").name, DEFAULT_LANDING);
}

#[test]
fn resolve_admin_root_redirects_to_landing() {
    assert_eq!(resolve_path("/admin").name, DEFAULT_LANDING);
    assert_eq!(resolve_path("/admin/").name, DEFAULT_LANDING);
}

#[test]
fn resolve_unknown_path_is_not_found() {
    assert_eq!(resolve_path("/nope").name, NOT_FOUND_ROUTE);
    assert_eq!(resolve_path("/admin/feed/extra").name, NOT_FOUND_ROUTE);
    assert_eq!(resolve_path("/*").name, NOT_FOUND_ROUTE);
}

#[test]
fn push_unknown_name_errors() {
    let router = Router::new(Session::new());
    assert_eq!(router.push("admin-nowhere"), Err(NavigationError::UnknownRoute("admin-nowhere".to_owned())));
    assert!(router.current().is_none());
}

#[test]
fn protected_route_requires_token() {
    let router = Router::new(Session::new());
    assert_eq!(router.push(DEFAULT_LANDING), Err(NavigationError::Unauthenticated(DEFAULT_LANDING)));

    assert_eq!(router.push(AUTH_ROUTE).unwrap().path, "/");
    assert_eq!(router.current().map(|r| r.name), Some(AUTH_ROUTE));
}

#[test]
fn admin_guard_blocks_non_admin() {
    let router = Router::new(signed_in("member"));
    assert_eq!(router.push(ADMIN_USERS_ROUTE), Err(NavigationError::Forbidden(ADMIN_USERS_ROUTE)));
    assert!(router.push("admin-help").is_ok());
    assert_eq!(router.current().map(|r| r.name), Some("admin-help"));
}

#[test]
fn admin_guard_admits_admin() {
    let session = signed_in("admin");
    assert!(is_admin_guard(&session));
    let router = Router::new(session);
    assert_eq!(router.push_path("/admin/usuarios").unwrap().name, ADMIN_USERS_ROUTE);
}

#[test]
fn navigate_swallows_refusals() {
    let router = Router::new(Session::new());
    router.navigate(DEFAULT_LANDING);
    assert!(router.current().is_none());
}
