use super::*;

#[test]
fn empty_role_list_admits_everyone() {
    assert!(DASHBOARD.admits(Role::Admin));
    assert!(DASHBOARD.admits(Role::Hod));
    assert!(DASHBOARD.admits(Role::Faculty));
}

#[test]
fn course_route_excludes_faculty() {
    assert!(COURSES.admits(Role::Hod));
    assert!(COURSES.admits(Role::Admin));
    assert!(!COURSES.admits(Role::Faculty));
}

#[test]
fn clo_route_excludes_admin() {
    assert!(CLOS.admits(Role::Faculty));
    assert!(!CLOS.admits(Role::Admin));
}

#[test]
fn program_outcomes_route_excludes_faculty() {
    assert!(POS.admits(Role::Hod));
    assert!(POS.admits(Role::Admin));
    assert!(!POS.admits(Role::Faculty));
}

#[test]
fn visible_routes_follow_role() {
    let paths = |role| visible_for(role).into_iter().map(|r| r.path).collect::<Vec<_>>();
    assert_eq!(paths(Role::Hod), ["/dashboard", "/courses", "/clos", "/pos", "/faculty"]);
    assert_eq!(paths(Role::Admin), ["/dashboard", "/courses", "/pos"]);
    assert_eq!(paths(Role::Faculty), ["/dashboard", "/clos"]);
}
