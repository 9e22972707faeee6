mod common;

use axum::http::StatusCode;
use common::{TestApp, body_string, location, session_cookie};

#[tokio::test]
async fn signup_then_signin_opens_session_with_user_name() {
    let t = TestApp::spawn("signup-signin").await;
    t.signup("Ana", "ana@x.com", "pw1", "12").await;

    let resp = t
        .post_form("/signin", "email=ana%40x.com&password=pw1", None)
        .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/homepage"));
    let cookie = session_cookie(&resp).expect("signin did not set a session cookie");

    let home = t.get("/homepage", Some(&cookie)).await;
    assert_eq!(home.status(), StatusCode::OK);
    assert!(body_string(home).await.contains("Welcome, Ana!"));
}

#[tokio::test]
async fn signup_session_reaches_homepage_directly() {
    let t = TestApp::spawn("signup-session").await;
    let cookie = t.signup("Bruno", "bruno@x.com", "secret", "3B").await;

    let resp = t.get("/", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/homepage"));
}

#[tokio::test]
async fn duplicate_email_rerenders_form_without_new_row() {
    let t = TestApp::spawn("duplicate").await;
    t.signup("Ana", "ana@x.com", "pw1", "12").await;

    let resp = t
        .post_form(
            "/signup",
            "name=Other&email=ana%40x.com&password=pw2&house_number=99",
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(session_cookie(&resp).is_none());
    assert!(body_string(resp).await.contains("Email already registered"));
    assert_eq!(t.storage.count_users().await.expect("count"), 1);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_share_one_message() {
    let t = TestApp::spawn("bad-credentials").await;
    t.signup("Ana", "ana@x.com", "pw1", "12").await;

    for form in [
        "email=ana%40x.com&password=nope",
        "email=ghost%40x.com&password=pw1",
    ] {
        let resp = t.post_form("/signin", form, None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(session_cookie(&resp).is_none());
        assert!(body_string(resp).await.contains("Invalid email or password"));
    }
}

#[tokio::test]
async fn email_match_is_exact_for_signin() {
    let t = TestApp::spawn("email-case").await;
    t.signup("Ana", "ana@x.com", "pw1", "12").await;

    let resp = t
        .post_form("/signin", "email=ANA%40x.com&password=pw1", None)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Invalid email or password"));
}

#[tokio::test]
async fn logout_clears_session_and_redirects_home() {
    let t = TestApp::spawn("logout").await;
    let cookie = t.signup("Ana", "ana@x.com", "pw1", "12").await;

    let resp = t.get("/logout", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/"));
    let cleared = session_cookie(&resp).expect("logout did not reset the cookie");
    assert_eq!(cleared, "directory_session=");

    let resp = t.get("/homepage", Some(&cleared)).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/"));
}

#[tokio::test]
async fn logout_without_session_still_redirects() {
    let t = TestApp::spawn("logout-anon").await;
    let resp = t.get("/logout", None).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/"));
}

#[tokio::test]
async fn protected_routes_redirect_anonymous_callers() {
    let t = TestApp::spawn("protected").await;

    for uri in [
        "/homepage",
        "/residents",
        "/api/search_residents?q=a",
        "/residents/1",
        "/services",
        "/api/search_services",
        "/services/1",
        "/services/add",
    ] {
        let resp = t.get(uri, None).await;
        assert_eq!(resp.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(location(&resp), Some("/"), "{uri}");
    }

    let resp = t
        .post_form(
            "/services/add",
            "name=X&email=x%40x.com&phone_number=1&address=Y",
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(t.storage.count_services().await.expect("count"), 0);
}

#[tokio::test]
async fn forged_cookie_is_treated_as_anonymous() {
    let t = TestApp::spawn("forged").await;
    let resp = t
        .get("/homepage", Some("directory_session=not-encrypted"))
        .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/"));
}

#[tokio::test]
async fn public_pages_render() {
    let t = TestApp::spawn("public").await;
    for uri in ["/", "/signup", "/signin"] {
        let resp = t.get(uri, None).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn unique_constraint_backs_the_email_check() {
    use altos_directory::DirectoryError;
    use altos_directory::db::NewUser;

    let t = TestApp::spawn("unique").await;
    let user = NewUser {
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        password_hash: "unused".to_string(),
        house_number: "12".to_string(),
        phone_number: None,
    };
    t.storage.insert_user(user.clone()).await.expect("first insert");
    let err = t
        .storage
        .insert_user(user)
        .await
        .expect_err("second insert must fail");
    assert!(matches!(err, DirectoryError::DuplicateEmail));
    assert_eq!(t.storage.count_users().await.expect("count"), 1);
}
