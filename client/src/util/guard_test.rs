use super::*;

const PHASES: [AuthPhase; 3] = [AuthPhase::Loading, AuthPhase::Authenticated, AuthPhase::Unauthenticated];

// =============================================================
// AppRoute
// =============================================================

#[test]
fn parse_recognizes_every_route() {
    let cases = [
        ("/sign-in", AppRoute::SignIn),
        ("/sign-up", AppRoute::SignUp),
        ("/", AppRoute::Home),
        ("/explore", AppRoute::Explore),
        ("/saved", AppRoute::Saved),
        ("/all-users", AppRoute::AllUsers),
        ("/create-post", AppRoute::CreatePost),
        ("/update-post/p1", AppRoute::UpdatePost("p1".to_owned())),
        ("/posts/p1", AppRoute::PostDetails("p1".to_owned())),
        ("/profile/u1", AppRoute::Profile("u1".to_owned())),
        ("/profile/u1/liked-posts", AppRoute::LikedPosts("u1".to_owned())),
        ("/update-profile/u1", AppRoute::UpdateProfile("u1".to_owned())),
    ];
    for (path, route) in cases {
        assert_eq!(AppRoute::parse(path), Some(route), "{path}");
    }
}

#[test]
fn parse_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(AppRoute::parse("/explore/?q=cats"), Some(AppRoute::Explore));
    assert_eq!(AppRoute::parse("/posts/p9#comments"), Some(AppRoute::PostDetails("p9".to_owned())));
    assert_eq!(AppRoute::parse(""), Some(AppRoute::Home));
}

#[test]
fn parse_rejects_unknown_and_incomplete_paths() {
    assert_eq!(AppRoute::parse("/posts"), None);
    assert_eq!(AppRoute::parse("/update-post/"), None);
    assert_eq!(AppRoute::parse("/sing-in"), None);
    assert_eq!(AppRoute::parse("/profile/u1/unknown"), None);
}

#[test]
fn only_auth_forms_are_public() {
    assert_eq!(AppRoute::SignIn.area(), Area::Public);
    assert_eq!(AppRoute::SignUp.area(), Area::Public);
    assert_eq!(AppRoute::Home.area(), Area::Private);
    assert_eq!(AppRoute::UpdateProfile("u".to_owned()).area(), Area::Private);
}

// =============================================================
// decide
// =============================================================

#[test]
fn loading_never_redirects() {
    for area in [Area::Public, Area::Private] {
        assert_eq!(decide(AuthPhase::Loading, area), GuardDecision::Placeholder);
    }
    for path in ["/", "/sign-in", "/posts/p1", "/nowhere"] {
        assert_eq!(decide_path(AuthPhase::Loading, path), GuardDecision::Placeholder, "{path}");
    }
}

#[test]
fn anonymous_visitor_on_home_goes_to_sign_in() {
    assert_eq!(decide_path(AuthPhase::Unauthenticated, "/"), GuardDecision::Redirect("/sign-in"));
}

#[test]
fn authenticated_user_on_sign_in_goes_to_private_entry() {
    assert_eq!(decide_path(AuthPhase::Authenticated, "/sign-in"), GuardDecision::Redirect("/"));
    assert_eq!(decide_path(AuthPhase::Authenticated, "/sign-up"), GuardDecision::Redirect("/"));
}

#[test]
fn matching_area_renders() {
    assert_eq!(decide_path(AuthPhase::Unauthenticated, "/sign-up"), GuardDecision::Render);
    assert_eq!(decide_path(AuthPhase::Authenticated, "/profile/u1"), GuardDecision::Render);
}

#[test]
fn redirect_targets_always_render_in_the_same_phase() {
    for phase in PHASES {
        for area in [Area::Public, Area::Private] {
            if let GuardDecision::Redirect(to) = decide(phase, area) {
                assert_eq!(decide_path(phase, to), GuardDecision::Render, "{phase:?} {area:?}");
            }
        }
    }
}

#[test]
fn unknown_paths_render_not_found_once_settled() {
    assert_eq!(decide_path(AuthPhase::Authenticated, "/nowhere"), GuardDecision::Render);
    assert_eq!(decide_path(AuthPhase::Unauthenticated, "/nowhere"), GuardDecision::Render);
}

#[test]
fn decision_follows_auth_state_transitions() {
    let mut state = AuthState::booting();
    assert_eq!(decide(state.phase(), Area::Private), GuardDecision::Placeholder);

    state.loading = false;
    assert_eq!(decide(state.phase(), Area::Private), GuardDecision::Redirect(PUBLIC_ENTRY));

    state.session = Some(crate::net::types::Session {
        id: "user-alice".to_owned(),
        account_id: "acc-alice".to_owned(),
        name: "Alice".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        image_url: String::new(),
        bio: None,
    });
    assert_eq!(decide(state.phase(), Area::Private), GuardDecision::Render);
    assert_eq!(decide(state.phase(), Area::Public), GuardDecision::Redirect(PRIVATE_ENTRY));
}
