//! Session Manager - mock authentication
//!
//! Holds the signed-in user (or none) and an in-flight flag. Every operation
//! simulates a network round trip and then unconditionally succeeds; there is
//! no credential check.

use super::{SessionOperation, SessionSnapshot};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info};
use zimedu_core::{Role, SessionConfig, SessionState, User};

/// Id given to every user produced by the mock
pub const MOCK_USER_ID: &str = "1";

/// Display name given to users that sign in rather than sign up
pub const PLACEHOLDER_NAME: &str = "Test User";

/// Mock authentication session, owned by the application root.
///
/// Cloning is cheap and every clone observes the same session. Overlapping
/// operations are serialized: a call made while another one is pending waits
/// for it to finish and then performs its own full transition.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Current snapshot, broadcast to subscribers on every change
    snapshot: Arc<watch::Sender<SessionSnapshot>>,
    /// Held for the whole duration of an operation
    operation_lock: Arc<Mutex<()>>,
    config: SessionConfig,
}

impl SessionManager {
    /// Create an anonymous, idle session
    pub fn new(config: SessionConfig) -> Self {
        let (snapshot, _) = watch::channel(SessionSnapshot::default());

        Self {
            snapshot: Arc::new(snapshot),
            operation_lock: Arc::new(Mutex::new(())),
            config,
        }
    }

    /// Sign in. Always succeeds with a placeholder student profile; the
    /// password is ignored.
    pub async fn sign_in(&self, email: &str, _password: &str) {
        let user = User::new(MOCK_USER_ID, email, PLACEHOLDER_NAME, Role::Student);
        self.run(
            SessionOperation::SignIn,
            self.config.sign_in_delay_ms,
            SessionState::Authenticated { user },
        )
        .await;
    }

    /// Sign up. Always succeeds with the supplied name and role.
    pub async fn sign_up(&self, email: &str, _password: &str, name: &str, role: Role) {
        let user = User::new(MOCK_USER_ID, email, name, role);
        self.run(
            SessionOperation::SignUp,
            self.config.sign_up_delay_ms,
            SessionState::Authenticated { user },
        )
        .await;
    }

    /// Sign out, whatever the prior state
    pub async fn sign_out(&self) {
        self.run(
            SessionOperation::SignOut,
            self.config.sign_out_delay_ms,
            SessionState::Anonymous,
        )
        .await;
    }

    /// Current snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Signed-in user, if any
    pub fn current_user(&self) -> Option<User> {
        self.snapshot.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.borrow().state.is_authenticated()
    }

    pub fn is_busy(&self) -> bool {
        self.snapshot.borrow().busy
    }

    /// Receive every subsequent snapshot change
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot.subscribe()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    async fn run(&self, operation: SessionOperation, delay_ms: u64, next: SessionState) {
        let _serialized = self.operation_lock.lock().await;
        let busy = BusyGuard::enter(&self.snapshot);

        info!(%operation, delay_ms, "Session operation started");
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        busy.complete(next);
        info!(%operation, "Session operation completed");
    }
}

/// Keeps `busy` raised for its lifetime. Dropping it before `complete` (the
/// operation's future was cancelled) lowers the flag and leaves the session
/// untouched.
struct BusyGuard<'a> {
    snapshot: &'a watch::Sender<SessionSnapshot>,
    completed: bool,
}

impl<'a> BusyGuard<'a> {
    fn enter(snapshot: &'a watch::Sender<SessionSnapshot>) -> Self {
        snapshot.send_modify(|s| s.busy = true);
        Self {
            snapshot,
            completed: false,
        }
    }

    /// Publish the new state and lower `busy` in a single update
    fn complete(mut self, next: SessionState) {
        self.snapshot.send_modify(|s| {
            s.state = next;
            s.busy = false;
        });
        self.completed = true;
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            debug!("Session operation abandoned before completion");
            self.snapshot.send_modify(|s| s.busy = false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Instant};

    fn manager() -> SessionManager {
        SessionManager::new(SessionConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_produces_placeholder_student() {
        let manager = manager();
        manager.sign_in("a@b.com", "x").await;

        let user = manager.current_user().unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.name, PLACEHOLDER_NAME);
        assert!(!user.id.is_empty());
        assert!(!manager.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_accepts_any_password() {
        let manager = manager();
        manager.sign_in("", "").await;
        assert!(manager.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_up_keeps_every_role() {
        for role in Role::ALL {
            let manager = manager();
            manager.sign_up("p@q.com", "pw", "Tendai", role).await;

            let user = manager.current_user().unwrap();
            assert_eq!(user.role, role);
            assert_eq!(user.name, "Tendai");
            assert_eq!(user.email, "p@q.com");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_out_from_any_state() {
        let manager = manager();
        manager.sign_out().await;
        assert_eq!(manager.snapshot().state, SessionState::Anonymous);

        manager.sign_in("a@b.com", "x").await;
        manager.sign_out().await;
        assert_eq!(manager.snapshot().state, SessionState::Anonymous);
        assert!(!manager.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_only_while_pending() {
        let manager = manager();
        assert!(!manager.is_busy());

        let task = tokio::spawn({
            let manager = manager.clone();
            async move { manager.sign_in("a@b.com", "x").await }
        });

        sleep(Duration::from_millis(10)).await;
        assert!(manager.is_busy());
        assert!(!manager.is_authenticated());

        task.await.unwrap();
        assert!(!manager.is_busy());
        assert!(manager.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_operations_use_configured_delays() {
        let manager = manager();

        let start = Instant::now();
        manager.sign_in("a@b.com", "x").await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1000) && elapsed < Duration::from_millis(1100));

        let start = Instant::now();
        manager.sign_out().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500) && elapsed < Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_operations_are_serialized() {
        let manager = manager();
        let start = Instant::now();

        let sign_in = tokio::spawn({
            let manager = manager.clone();
            async move { manager.sign_in("a@b.com", "x").await }
        });
        sleep(Duration::from_millis(10)).await;

        let sign_out = tokio::spawn({
            let manager = manager.clone();
            async move { manager.sign_out().await }
        });

        sign_in.await.unwrap();
        assert!(manager.is_authenticated());

        sign_out.await.unwrap();
        assert!(!manager.is_authenticated());
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_operation_clears_busy() {
        let manager = manager();

        let result =
            tokio::time::timeout(Duration::from_millis(100), manager.sign_in("a@b.com", "x"))
                .await;
        assert!(result.is_err());

        assert!(!manager.is_busy());
        assert!(!manager.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_final_state() {
        let manager = manager();
        let mut receiver = manager.subscribe();

        manager.sign_up("t@school.zw", "pw", "Mr. Moyo", Role::Teacher).await;

        assert!(receiver.has_changed().unwrap());
        let snapshot = receiver.borrow_and_update().clone();
        assert!(!snapshot.busy);
        assert_eq!(snapshot.user().unwrap().role, Role::Teacher);
    }
}
