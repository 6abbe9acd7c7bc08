//! Router-level tests for the activity crate

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use auth::models::{TeacherAccount, UserName};
    use auth::{
        AuthAppState, AuthConfig, MemorySessionStore, PasswordVerifier, SessionManager,
        StaticCredentialStore, auth_router,
    };
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode, header};
    use http_body_util::BodyExt;
    use platform::password::{ClearTextPassword, MIN_COST};
    use tower::ServiceExt;

    use crate::{ActivityAppState, MemoryActivityStore, activity_router};

    struct TestApp {
        router: Router,
        activities: Arc<MemoryActivityStore>,
    }

    fn test_app() -> TestApp {
        let hash = ClearTextPassword::new("password123".to_string())
            .hash(MIN_COST)
            .unwrap();
        let teachers = StaticCredentialStore::from_accounts(
            [TeacherAccount::new(UserName::new("teacher1").unwrap(), hash)],
            MIN_COST,
        )
        .unwrap();

        let config = AuthConfig::development();
        let auth_state = AuthAppState::new(
            Arc::new(teachers),
            SessionManager::new(Arc::new(MemorySessionStore::new()), config.session_ttl),
            Arc::new(PasswordVerifier::new(MIN_COST).unwrap()),
            Arc::new(config),
        );

        let activities = Arc::new(MemoryActivityStore::seeded());
        let router = Router::new()
            .nest("/auth", auth_router(auth_state.clone()))
            .merge(activity_router(
                ActivityAppState::new(activities.clone()),
                auth_state.middleware_state(),
            ));

        TestApp { router, activities }
    }

    async fn login(app: &TestApp) -> String {
        let request = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"username":"teacher1","password":"password123"}"#,
            ))
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    async fn send(
        app: &TestApp,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        app.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn participants(app: &TestApp, activity: &str) -> Vec<String> {
        use crate::domain::repository::ActivityRepository;

        app.activities.list_all().await.unwrap()[activity]
            .participants
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_listing_is_public() {
        let app = test_app();
        let response = send(&app, "GET", "/activities", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body.as_object().unwrap().len(), 9);
        assert_eq!(
            body["Chess Club"],
            serde_json::json!({
                "description": "Learn strategies and compete in chess tournaments",
                "schedule": "Fridays, 3:30 PM - 5:00 PM",
                "max_participants": 12,
                "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
            })
        );
    }

    #[tokio::test]
    async fn test_signup_requires_teacher_session() {
        let app = test_app();
        let before = participants(&app, "Chess Club").await;

        let response = send(
            &app,
            "POST",
            "/activities/Chess%20Club/signup?email=new@mergington.edu",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()["x-auth-required"], "true");

        let response = send(
            &app,
            "DELETE",
            "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
            Some("session_id=forged"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        assert_eq!(participants(&app, "Chess Club").await, before);
    }

    #[tokio::test]
    async fn test_gate_runs_before_validation() {
        let app = test_app();
        let response = send(&app, "POST", "/activities/Knitting/signup", None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_signup_and_unregister_as_teacher() {
        let app = test_app();
        let cookie = login(&app).await;

        let response = send(
            &app,
            "POST",
            "/activities/Chess%20Club/signup?email=new@mergington.edu",
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["message"],
            "Signed up new@mergington.edu for Chess Club"
        );
        assert_eq!(
            participants(&app, "Chess Club").await.last().unwrap(),
            "new@mergington.edu"
        );

        let response = send(
            &app,
            "DELETE",
            "/activities/Chess%20Club/unregister?email=new@mergington.edu",
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["message"],
            "Unregistered new@mergington.edu from Chess Club"
        );
        assert_eq!(participants(&app, "Chess Club").await.len(), 2);
    }

    #[tokio::test]
    async fn test_business_errors() {
        let app = test_app();
        let cookie = login(&app).await;

        let response = send(
            &app,
            "POST",
            "/activities/Knitting/signup?email=a@mergington.edu",
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["detail"], "Activity not found");

        let response = send(
            &app,
            "POST",
            "/activities/Chess%20Club/signup?email=michael@mergington.edu",
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["detail"],
            "Student is already signed up"
        );

        let response = send(
            &app,
            "DELETE",
            "/activities/Chess%20Club/unregister?email=emma@mergington.edu",
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["detail"],
            "Student is not signed up for this activity"
        );

        let response = send(
            &app,
            "POST",
            "/activities/Chess%20Club/signup?email=not-an-email",
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, "POST", "/activities/Chess%20Club/signup", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_logout_closes_the_gate() {
        let app = test_app();
        let cookie = login(&app).await;

        let response = send(&app, "POST", "/auth/logout", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(
            &app,
            "POST",
            "/activities/Chess%20Club/signup?email=new@mergington.edu",
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
