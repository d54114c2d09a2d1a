//! Scripted walkthrough of every screen against in-memory collaborators.
//!
//! Runs a fixed sequence of user actions and logs the resulting view state.
//! Set `RUST_LOG=debug` to see controller-level transitions, and
//! `VIEWSTATE_LOG=<path>` to write them to a file instead of stderr.

use anyhow::Context;
use viewstate::config::Config;
use viewstate::mvi::Reducer;
use viewstate::screens::counter::{CounterIntent, CounterReducer, CounterState};
use viewstate::screens::login::LoginForm;
use viewstate::screens::notifications::{NotificationCenter, NotificationFilter};
use viewstate::screens::profile::{MockDirectory, UserProfileScreen};
use viewstate::screens::registration::RegistrationForm;
use viewstate::screens::user_info::UserInfo;
use viewstate::screens::users::{JsonUserService, UserListScreen};
use viewstate::telemetry;

const USERS_BODY: &str = r#"[
    {"id": 1, "name": "Leanne Graham", "email": "leanne@example.com"},
    {"id": 2, "name": "Ervin Howell", "email": "ervin@example.com"}
]"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os(telemetry::LOG_ENV).is_some() {
        telemetry::init_tracing();
    } else {
        telemetry::init_stderr_tracing();
    }

    let config = Config::load().context("loading configuration")?;

    login(&config)?;
    registration(&config)?;
    notifications();
    users(&config).await?;
    profile(&config).await?;
    counter_and_greeting();

    Ok(())
}

fn login(config: &Config) -> anyhow::Result<()> {
    let schema = config.form("login").context("login form schema")?;
    let mut login = LoginForm::with_schema(&schema);

    let outcome = login.submit();
    tracing::info!(
        ?outcome,
        form_error = ?login.form_error(),
        email = ?login.email_error(),
        "login: empty submit"
    );

    login.set_email("bad");
    login.blur("email");
    tracing::info!(email = ?login.email_error(), "login: malformed email");

    login.set_email("user@example.com");
    login.set_password("hunter22");
    let outcome = login.submit();
    tracing::info!(?outcome, success = ?login.success_message(), "login: valid submit");
    Ok(())
}

fn registration(config: &Config) -> anyhow::Result<()> {
    let schema = config
        .form("registration")
        .context("registration form schema")?;
    let mut registration = RegistrationForm::with_schema(&schema);

    registration.set_email("new@example.com");
    registration.set_password("short");
    let outcome = registration.submit();
    tracing::info!(
        ?outcome,
        password = ?registration.password_error(),
        "registration: short password"
    );

    registration.set_password("long enough");
    let outcome = registration.submit();
    tracing::info!(
        ?outcome,
        confirmation = ?registration.confirmation().map(|c| c.title),
        "registration: fixed"
    );

    registration.reset_form();
    tracing::info!(submitted = registration.is_submitted(), "registration: register another");
    Ok(())
}

fn notifications() {
    let mut center = NotificationCenter::default();
    tracing::info!(label = %center.state().unread_label(), "notifications: initial");

    center.mark_as_read(1);
    center.set_filter(NotificationFilter::Read);
    tracing::info!(
        unread = center.state().unread_count(),
        shown = center.state().filtered().len(),
        "notifications: first read, read filter"
    );

    center.clear_read();
    center.set_filter(NotificationFilter::All);
    tracing::info!(remaining = center.state().list.len(), "notifications: cleared read");
}

async fn users(config: &Config) -> anyhow::Result<()> {
    let service = JsonUserService::ok(USERS_BODY).with_latency(config.simulated_latency());
    let mut screen = UserListScreen::with_policy(service, config.defaults.load_policy);
    screen.init().await.context("loading users")?;
    for user in screen.users() {
        tracing::info!(name = %user.name, avatar = %user.avatar_url(), "users: row");
    }
    Ok(())
}

async fn profile(config: &Config) -> anyhow::Result<()> {
    let directory = MockDirectory::default().with_latency(config.simulated_latency());
    let mut screen = UserProfileScreen::with_policy(directory, config.defaults.load_policy);

    screen.select("nobody@example.com");
    screen.load_selected().await.context("loading unknown profile")?;
    tracing::info!(error = ?screen.error_message(), "profile: unknown email");

    screen.select("John@Example.com");
    screen.load_selected().await.context("loading profile")?;
    tracing::info!(
        role = ?screen.user_role(),
        welcome = ?screen.welcome_message(),
        last_login = ?screen.last_login_text(),
        "profile: loaded"
    );

    screen.toggle_status();
    tracing::info!(status = ?screen.status_label(), "profile: toggled");
    Ok(())
}

fn counter_and_greeting() {
    let state = CounterReducer::reduce_all(
        CounterState::default(),
        [CounterIntent::Increment, CounterIntent::Increment, CounterIntent::Decrement],
    );
    tracing::info!(title = %state.title(), "counter");

    let info = UserInfo::new("Alice");
    tracing::info!(greeting = ?info.welcome_message(), "user info");
}
