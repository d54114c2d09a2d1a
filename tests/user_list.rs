mod common;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use common::{user, ScriptedUserService};
use viewstate::resource::ErrorInfo;
use viewstate::screens::users::{
    JsonUserService, User, UserListScreen, UserListView, UserService, ERROR_MESSAGE,
};

/// Never answers the first fetch; answers every later one.
struct StallsOnce {
    stalled: AtomicBool,
    users: Vec<User>,
}

impl UserService for StallsOnce {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, ErrorInfo>> + Send {
        let stall = !self.stalled.swap(true, Ordering::SeqCst);
        let users = self.users.clone();
        async move {
            if stall {
                std::future::pending::<()>().await;
            }
            Ok(users)
        }
    }
}

#[tokio::test]
async fn shows_users_after_init() {
    let users = vec![user(1, "Leanne"), user(2, "Ervin")];
    let mut screen = UserListScreen::new(ScriptedUserService::new(vec![Ok(users.clone())]));
    assert_eq!(screen.view(), UserListView::NotLoaded);

    screen.init().await.unwrap();

    assert_eq!(screen.view(), UserListView::Users(&users));
    assert!(!screen.is_loading());
    assert_eq!(screen.error_message(), None);
}

#[tokio::test]
async fn failure_shows_generic_message() {
    let service =
        JsonUserService::failing(ErrorInfo::with_code("Http failure response: 500", "500"));
    let mut screen = UserListScreen::new(service);

    screen.init().await.unwrap();

    assert_eq!(screen.view(), UserListView::Failed(ERROR_MESSAGE));
    assert_eq!(screen.error_message(), Some(ERROR_MESSAGE));
    assert!(screen.users().is_empty());
    assert_eq!(
        screen.status().error().and_then(|e| e.code.as_deref()),
        Some("500")
    );
}

#[tokio::test]
async fn retry_after_failure_recovers() {
    let service = ScriptedUserService::new(vec![
        Err(ErrorInfo::new("connection reset")),
        Ok(vec![user(3, "Clementine")]),
    ]);
    let mut screen = UserListScreen::new(service);

    screen.init().await.unwrap();
    assert!(screen.error_message().is_some());

    screen.init().await.unwrap();
    assert_eq!(screen.error_message(), None);
    assert_eq!(screen.users()[0].name, "Clementine");
}

#[tokio::test]
async fn malformed_body_is_a_load_failure() {
    let mut screen = UserListScreen::new(JsonUserService::ok("<html>oops</html>"));
    screen.init().await.unwrap();
    assert_eq!(screen.view(), UserListView::Failed(ERROR_MESSAGE));
}

#[tokio::test]
async fn json_body_is_decoded_in_order() {
    let body = r#"[{"id":2,"name":"B","email":"b@x.io"},{"id":1,"name":"A","email":"a@x.io"}]"#;
    let mut screen = UserListScreen::new(JsonUserService::ok(body));
    screen.init().await.unwrap();
    let ids: Vec<u32> = screen.users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn init_abandoned_by_caller_can_be_retried() {
    let mut screen = UserListScreen::new(StallsOnce {
        stalled: AtomicBool::new(false),
        users: vec![user(4, "Patricia")],
    });

    let timed_out = tokio::time::timeout(Duration::from_millis(5), screen.init()).await;
    assert!(timed_out.is_err());
    assert_eq!(screen.view(), UserListView::NotLoaded);

    screen.init().await.unwrap();
    assert_eq!(screen.users()[0].name, "Patricia");
}
