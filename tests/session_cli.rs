mod support;

use predicates::str::contains;

use support::TestHome;

#[test]
fn login_with_default_credentials_writes_session_slots() {
    let home = TestHome::new();

    home.cmd()
        .args(["login", "admin", "password"])
        .assert()
        .success()
        .stdout(contains("Logged in as admin"));

    assert_eq!(home.read_slot("isLoggedIn").as_deref(), Some("true"));
    assert_eq!(home.read_slot("username").as_deref(), Some("admin"));
}

#[test]
fn login_with_bad_credentials_fails_and_writes_nothing() {
    let home = TestHome::new();

    for (user, pass) in [("admin", "wrong"), ("root", "password")] {
        home.cmd()
            .args(["login", user, pass])
            .assert()
            .failure()
            .code(2)
            .stderr(contains("invalid username or password"));
    }

    assert_eq!(home.read_slot("isLoggedIn"), None);
    assert_eq!(home.read_slot("username"), None);
}

#[test]
fn whoami_and_logout_round_trip() {
    let home = TestHome::new();
    home.login();

    home.cmd()
        .args(["whoami"])
        .assert()
        .success()
        .stdout(contains("Logged in as admin"));

    home.cmd()
        .args(["logout"])
        .assert()
        .success()
        .stdout(contains("Logged out"));

    assert_eq!(home.read_slot("isLoggedIn"), None);
    assert_eq!(home.read_slot("username"), None);

    home.cmd()
        .args(["whoami"])
        .assert()
        .failure()
        .code(3)
        .stderr(contains("not logged in"));
}

#[test]
fn logout_when_already_logged_out_still_succeeds() {
    let home = TestHome::new();

    home.cmd().args(["logout"]).assert().success();
}

#[test]
fn tasks_survive_logout_and_relogin() {
    let home = TestHome::new();
    home.login();

    home.cmd().args(["add", "Persistent"]).assert().success();
    home.cmd().args(["logout"]).assert().success();

    // The list stays in storage while the session slots are cleared.
    assert!(home.read_slot("todos").is_some());

    home.login();
    home.cmd()
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Persistent"));
}

#[test]
fn configured_credentials_replace_the_defaults() {
    let home = TestHome::new();
    home.write_config(
        r#"
[auth]
username = "alice"
password = "opensesame"
"#,
    );

    home.cmd()
        .args(["login", "admin", "password"])
        .assert()
        .failure()
        .code(2);

    home.cmd()
        .args(["login", "alice", "opensesame"])
        .assert()
        .success()
        .stdout(contains("Logged in as alice"));

    assert_eq!(home.read_slot("username").as_deref(), Some("alice"));
}

#[test]
fn stale_session_flag_values_do_not_count() {
    let home = TestHome::new();
    home.write_slot("isLoggedIn", "yes");
    home.write_slot("username", "ghost");

    home.cmd()
        .args(["whoami"])
        .assert()
        .failure()
        .code(3)
        .stderr(contains("not logged in"));
}
