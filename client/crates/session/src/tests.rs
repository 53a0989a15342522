//! Unit tests for the session crate

use crate::application::restore::RestoreSessionUseCase;
use crate::application::sign_in::SignInUseCase;
use crate::application::sign_out::SignOutUseCase;
use crate::application::sign_up::SignUpUseCase;
use crate::domain::credential::{Credential, SessionToken};
use crate::domain::repository::{
    AuthGateway, CredentialStore, LoginCredentials, RegisterData,
};
use crate::domain::user::{UserProfile, UserRole};
use crate::error::{SessionError, SessionResult};
use crate::infra::file::FileCredentialStore;
use crate::store::SessionStore;
use kernel::id::UserId;
use platform::http::{HttpError, TokenSlot};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

fn profile(balance: Decimal) -> UserProfile {
    UserProfile {
        id: UserId::new(7),
        username: "TrafficKing".to_string(),
        email: "traffic@king.example".to_string(),
        balance,
        clicks_received: 12,
        clicks_given: 30,
        referral_code: "TK7".to_string(),
        role: UserRole::Member,
        active: true,
        vip_member: false,
        vip_expiry: None,
        last_login: None,
        created_at: None,
        daily_login_streak: 0,
    }
}

struct FakeGateway {
    password: String,
    server_profile: UserProfile,
    reject_current_user: AtomicBool,
    logouts: AtomicUsize,
}

impl FakeGateway {
    fn new(password: &str, server_profile: UserProfile) -> Self {
        Self {
            password: password.to_string(),
            server_profile,
            reject_current_user: AtomicBool::new(false),
            logouts: AtomicUsize::new(0),
        }
    }
}

impl AuthGateway for FakeGateway {
    async fn login(&self, credentials: &LoginCredentials) -> SessionResult<Credential> {
        if credentials.password != self.password {
            return Err(SessionError::InvalidCredentials);
        }
        Ok(Credential::new(
            SessionToken::new("sess-1").unwrap(),
            self.server_profile.clone(),
        ))
    }

    async fn register(&self, data: &RegisterData) -> SessionResult<Credential> {
        let mut user = self.server_profile.clone();
        user.username = data.username.clone();
        Ok(Credential::new(SessionToken::new("sess-new").unwrap(), user))
    }

    async fn logout(&self) -> SessionResult<()> {
        self.logouts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn current_user(&self) -> SessionResult<UserProfile> {
        if self.reject_current_user.load(Ordering::SeqCst) {
            return Err(SessionError::Transport(HttpError::Status {
                status: 401,
                body: "Invalid session".to_string(),
            }));
        }
        Ok(self.server_profile.clone())
    }
}

#[derive(Default)]
struct MemoryCredentialStore {
    slot: Mutex<Option<Credential>>,
}

impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> SessionResult<Option<Credential>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, credential: &Credential) -> SessionResult<()> {
        *self.slot.lock().await = Some(credential.clone());
        Ok(())
    }

    async fn clear(&self) -> SessionResult<()> {
        *self.slot.lock().await = None;
        Ok(())
    }
}

struct Harness {
    gateway: Arc<FakeGateway>,
    credentials: Arc<MemoryCredentialStore>,
    store: Arc<SessionStore>,
    slot: TokenSlot,
}

fn harness() -> Harness {
    let slot = TokenSlot::new();
    Harness {
        gateway: Arc::new(FakeGateway::new("hunter22", profile(Decimal::new(1050, 2)))),
        credentials: Arc::new(MemoryCredentialStore::default()),
        store: Arc::new(SessionStore::new(slot.clone())),
        slot,
    }
}

#[tokio::test]
async fn test_sign_in_installs_and_persists() {
    let h = harness();
    let mut updates = h.store.subscribe();

    let use_case = SignInUseCase::new(h.gateway.clone(), h.credentials.clone(), h.store.clone());
    use_case
        .execute(LoginCredentials {
            username: "TrafficKing".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();

    assert!(h.store.is_authenticated().await);
    assert_eq!(h.slot.get(), Some("sess-1".to_string()));
    assert!(h.credentials.load().await.unwrap().is_some());

    updates.changed().await.unwrap();
    let seen = updates.borrow().clone().unwrap();
    assert_eq!(seen.username, "TrafficKing");
}

#[tokio::test]
async fn test_sign_in_rejected_leaves_store_empty() {
    let h = harness();
    let use_case = SignInUseCase::new(h.gateway.clone(), h.credentials.clone(), h.store.clone());

    let err = use_case
        .execute(LoginCredentials {
            username: "TrafficKing".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::InvalidCredentials));
    assert!(!h.store.is_authenticated().await);
    assert!(!h.slot.is_set());
    assert!(h.credentials.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_sign_in_requires_both_fields() {
    let h = harness();
    let use_case = SignInUseCase::new(h.gateway.clone(), h.credentials.clone(), h.store.clone());

    let err = use_case
        .execute(LoginCredentials {
            username: "  ".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Validation(_)));
}

#[tokio::test]
async fn test_sign_up_validation() {
    let h = harness();
    let use_case = SignUpUseCase::new(h.gateway.clone(), h.credentials.clone(), h.store.clone());

    let base = RegisterData {
        username: "NewMember".to_string(),
        email: "new@member.example".to_string(),
        password: "longenough".to_string(),
        confirm_password: "longenough".to_string(),
        referred_by: None,
    };

    let mismatch = RegisterData {
        confirm_password: "different".to_string(),
        ..base.clone()
    };
    assert!(matches!(
        use_case.execute(mismatch).await.unwrap_err(),
        SessionError::Validation(msg) if msg.contains("match")
    ));

    let bad_email = RegisterData {
        email: "not-an-email".to_string(),
        ..base.clone()
    };
    assert!(matches!(
        use_case.execute(bad_email).await.unwrap_err(),
        SessionError::Validation(_)
    ));

    let short_password = RegisterData {
        password: "short".to_string(),
        confirm_password: "short".to_string(),
        ..base.clone()
    };
    assert!(matches!(
        use_case.execute(short_password).await.unwrap_err(),
        SessionError::Validation(_)
    ));

    use_case.execute(base).await.unwrap();
    assert_eq!(
        h.store.current_user().await.unwrap().username,
        "NewMember"
    );
}

#[tokio::test]
async fn test_sign_out_tears_down_and_notifies() {
    let h = harness();
    SignInUseCase::new(h.gateway.clone(), h.credentials.clone(), h.store.clone())
        .execute(LoginCredentials {
            username: "TrafficKing".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();

    let mut updates = h.store.subscribe();

    SignOutUseCase::new(h.gateway.clone(), h.credentials.clone(), h.store.clone())
        .execute()
        .await
        .unwrap();

    assert!(!h.store.is_authenticated().await);
    assert!(!h.slot.is_set());
    assert!(h.credentials.load().await.unwrap().is_none());
    assert_eq!(h.gateway.logouts.load(Ordering::SeqCst), 1);

    updates.changed().await.unwrap();
    assert!(updates.borrow().is_none());
}

#[tokio::test]
async fn test_restore_refreshes_profile() {
    let h = harness();
    // Persisted snapshot is stale: server says 10.50, file says 2.00
    h.credentials
        .save(&Credential::new(
            SessionToken::new("sess-1").unwrap(),
            profile(Decimal::new(200, 2)),
        ))
        .await
        .unwrap();

    let restored =
        RestoreSessionUseCase::new(h.gateway.clone(), h.credentials.clone(), h.store.clone())
            .execute()
            .await
            .unwrap();

    assert!(restored);
    let user = h.store.current_user().await.unwrap();
    assert_eq!(user.balance, Decimal::new(1050, 2));
    assert_eq!(h.slot.get(), Some("sess-1".to_string()));
}

#[tokio::test]
async fn test_restore_clears_rejected_session() {
    let h = harness();
    h.credentials
        .save(&Credential::new(
            SessionToken::new("sess-dead").unwrap(),
            profile(Decimal::ZERO),
        ))
        .await
        .unwrap();
    h.gateway.reject_current_user.store(true, Ordering::SeqCst);

    let restored =
        RestoreSessionUseCase::new(h.gateway.clone(), h.credentials.clone(), h.store.clone())
            .execute()
            .await
            .unwrap();

    assert!(!restored);
    assert!(!h.store.is_authenticated().await);
    assert!(!h.slot.is_set());
    assert!(h.credentials.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_restore_without_stored_credential() {
    let h = harness();
    let restored =
        RestoreSessionUseCase::new(h.gateway.clone(), h.credentials.clone(), h.store.clone())
            .execute()
            .await
            .unwrap();
    assert!(!restored);
    assert!(!h.store.is_authenticated().await);
}

#[tokio::test]
async fn test_optimistic_balance_patches_notify() {
    let h = harness();
    h.store
        .install(Credential::new(
            SessionToken::new("sess-1").unwrap(),
            profile(Decimal::new(1000, 2)),
        ))
        .await;

    let mut updates = h.store.subscribe();

    h.store.credit_balance(Decimal::new(75, 2)).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(
        updates.borrow().clone().unwrap().balance,
        Decimal::new(1075, 2)
    );

    h.store.debit_balance(Decimal::new(1075, 2)).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow().clone().unwrap().balance, Decimal::ZERO);
}

#[tokio::test]
async fn test_balance_patch_requires_session() {
    let h = harness();
    let err = h.store.credit_balance(Decimal::ONE).await.unwrap_err();
    assert!(matches!(err, SessionError::Unauthenticated));
}

#[tokio::test]
async fn test_file_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("session.json"));

    assert!(store.load().await.unwrap().is_none());

    let credential = Credential::new(
        SessionToken::new("sess-file").unwrap(),
        profile(Decimal::new(1, 0)),
    );
    store.save(&credential).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded.session_id, credential.session_id);
    assert_eq!(loaded.user.username, credential.user.username);

    store.clear().await.unwrap();
    assert!(store.load().await.unwrap().is_none());
    // Clearing twice is fine
    store.clear().await.unwrap();
}

#[tokio::test]
async fn test_file_store_corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    tokio::fs::write(&path, "{not json").await.unwrap();

    let store = FileCredentialStore::new(path.clone());
    let err = store.load().await.unwrap_err();
    assert!(matches!(err, SessionError::Decode(_)));
}
