use super::*;
use session::Identity;

fn signed_in(role: Role) -> SessionSnapshot {
    let mut identity = Identity::simulated("+15551234567");
    identity.role = role;
    SessionSnapshot::authenticated(identity)
}

fn hrefs(snapshot: &SessionSnapshot) -> Vec<&'static str> {
    visible_links(snapshot).into_iter().map(|link| link.href).collect()
}

#[test]
fn root_link_is_active_only_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/admin", "/"));
}

#[test]
fn other_links_match_sub_paths() {
    assert!(is_active("/admin", "/admin"));
    assert!(is_active("/admin/users", "/admin"));
    assert!(!is_active("/candidate-dashboard", "/admin"));
}

#[test]
fn loading_shows_only_public_links() {
    assert_eq!(hrefs(&SessionSnapshot::loading()), vec!["/"]);
}

#[test]
fn signed_out_sees_sign_in_but_no_role_pages() {
    assert_eq!(hrefs(&SessionSnapshot::anonymous()), vec!["/", "/login"]);
}

#[test]
fn admin_sees_admin_panel_only() {
    assert_eq!(hrefs(&signed_in(Role::Admin)), vec!["/", "/admin"]);
}

#[test]
fn candidate_sees_candidate_dashboard_only() {
    assert_eq!(hrefs(&signed_in(Role::Candidate)), vec!["/", "/candidate-dashboard"]);
}

#[test]
fn voter_sees_public_links_only() {
    assert_eq!(hrefs(&signed_in(Role::Voter)), vec!["/"]);
}
