//! ZimEdu Applications - the logic behind the app's screens
//!
//! This crate owns everything between the presentation layers
//! (zimedu-web/cli) and the shared abstractions in zimedu-core:
//!
//! - The mock authentication session and its simulated latency
//! - Sign-in/sign-up form checks
//! - The mock catalog: resource library, tutoring, community, profile, home
//! - The cloud "add resource" write into a document store
//!
//! ## Architecture
//!
//! [`ZimEduApplication`] is the application root. It owns the
//! [`SessionManager`] and hands it out by reference; code that asks for the
//! session on an application built without one gets
//! [`ApplicationError::SessionScope`].

pub mod auth;
pub mod catalog;
pub mod session;
pub mod store;

pub use auth::{FormError, SignInForm, SignUpForm};
pub use catalog::*;
pub use session::{SessionManager, SessionOperation, SessionSnapshot, MOCK_USER_ID};
pub use store::{generate_document_id, MemoryDocumentStore, DOCUMENT_ID_LEN};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use zimedu_core::{performance, DocumentStore, User, ZimEduConfig, ZimEduResult};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Collection the add-resource endpoint appends to
pub const RESOURCES_COLLECTION: &str = "resources";

/// Author name used for questions posted while nobody is signed in
const ANONYMOUS_AUTHOR: &str = "Student";

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Core error: {0}")]
    Core(#[from] zimedu_core::ZimEduError),

    #[error("{0}")]
    Form(#[from] FormError),

    #[error("Session used outside its scope: {message}")]
    SessionScope { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

impl ApplicationError {
    /// Create a session scope error
    pub fn session_scope<S: Into<String>>(message: S) -> Self {
        Self::SessionScope {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Using the session outside the application's lifetime is a programming
    /// error, never something a user can fix
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SessionScope { .. })
    }
}

impl From<AskError> for ApplicationError {
    fn from(error: AskError) -> Self {
        Self::validation(error.to_string())
    }
}

impl From<ProfileError> for ApplicationError {
    fn from(error: ProfileError) -> Self {
        Self::validation(error.to_string())
    }
}

/// Body of an add-resource request. Nothing is validated; absent fields are
/// stored as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct NewResource {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub url: Option<String>,
}

/// Main ZimEdu application service
pub struct ZimEduApplication {
    /// Present unless the application was built without one
    session: Option<SessionManager>,
    store: Arc<dyn DocumentStore>,
    library: RwLock<ResourceLibrary>,
    tutoring: RwLock<TutoringMarketplace>,
    community: RwLock<CommunityForum>,
    profile: RwLock<Profile>,
    config: ZimEduConfig,
}

/// Builder for ZimEduApplication
pub struct ZimEduApplicationBuilder {
    config: ZimEduConfig,
    store: Option<Arc<dyn DocumentStore>>,
    with_session: bool,
}

impl ZimEduApplicationBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: ZimEduConfig) -> Self {
        Self {
            config,
            store: None,
            with_session: true,
        }
    }

    /// Use `store` for cloud writes instead of a fresh in-memory one
    pub fn with_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build without a session manager; every session access then fails
    pub fn without_session(mut self) -> Self {
        self.with_session = false;
        self
    }

    /// Build the ZimEduApplication
    pub fn build(self) -> ApplicationResult<ZimEduApplication> {
        self.config.validate()?;

        let session = self
            .with_session
            .then(|| SessionManager::new(self.config.session.clone()));

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryDocumentStore::new()));

        let seeded = self.config.catalog.seed_mock_data;
        let (library, tutoring, community) = if seeded {
            (
                ResourceLibrary::seeded(),
                TutoringMarketplace::seeded(),
                CommunityForum::seeded(),
            )
        } else {
            (
                ResourceLibrary::empty(),
                TutoringMarketplace::empty(),
                CommunityForum::empty(),
            )
        };

        info!(
            seeded,
            session = session.is_some(),
            "ZimEdu application initialized"
        );

        Ok(ZimEduApplication {
            session,
            store,
            library: RwLock::new(library),
            tutoring: RwLock::new(tutoring),
            community: RwLock::new(community),
            profile: RwLock::new(Profile::seeded()),
            config: self.config,
        })
    }
}

impl ZimEduApplication {
    /// Create a new ZimEdu application with default wiring
    pub fn new(config: ZimEduConfig) -> ApplicationResult<Self> {
        ZimEduApplicationBuilder::new(config).build()
    }

    /// Create a builder for more advanced configuration
    pub fn builder(config: ZimEduConfig) -> ZimEduApplicationBuilder {
        ZimEduApplicationBuilder::new(config)
    }

    pub fn config(&self) -> &ZimEduConfig {
        &self.config
    }

    // ========================================
    // Session
    // ========================================

    /// The session manager this application owns
    pub fn session(&self) -> ApplicationResult<&SessionManager> {
        self.session.as_ref().ok_or_else(|| {
            ApplicationError::session_scope(
                "the session must be used within the application that provides it",
            )
        })
    }

    /// Sign in. Blank fields are accepted like any others.
    pub async fn sign_in(&self, form: &SignInForm) -> ApplicationResult<User> {
        let session = self.session()?;
        session.sign_in(&form.email, &form.password).await;
        self.signed_in_user(session)
    }

    /// Check the sign-up form, then create the account
    pub async fn sign_up(&self, form: &SignUpForm) -> ApplicationResult<User> {
        let session = self.session()?;
        form.validate()?;

        session
            .sign_up(&form.email, &form.password, &form.name, form.role)
            .await;
        self.signed_in_user(session)
    }

    pub async fn sign_out(&self) -> ApplicationResult<()> {
        self.session()?.sign_out().await;
        Ok(())
    }

    fn signed_in_user(&self, session: &SessionManager) -> ApplicationResult<User> {
        session
            .current_user()
            .ok_or_else(|| ApplicationError::internal("session is anonymous after signing in"))
    }

    /// Name shown for the current user: the profile edit wins over the
    /// account name
    pub async fn display_name(&self) -> ApplicationResult<Option<String>> {
        let account = self.session()?.current_user();
        let profile = self.profile.read().await;

        Ok(profile
            .display_name(account.as_ref().map(|u| u.name.as_str()))
            .map(str::to_string))
    }

    // ========================================
    // Home
    // ========================================

    pub async fn home(&self) -> ApplicationResult<HomeDashboard> {
        let user = self.session()?.current_user();
        let name = self.display_name().await?;

        let shown = user.map(|mut u| {
            if let Some(name) = name {
                u.name = name;
            }
            u
        });
        Ok(HomeDashboard::for_user(shown.as_ref()))
    }

    // ========================================
    // Resource library
    // ========================================

    pub async fn resource_categories(&self) -> Vec<ResourceCategory> {
        self.library.read().await.categories().to_vec()
    }

    pub async fn search_resources(&self, search: &str, category: &str) -> Vec<Resource> {
        let library = self.library.read().await;
        let results =
            performance::measure_sync("search_resources", || library.filter(search, category));
        debug!(search, category, hits = results.len(), "Resource search");
        results
    }

    pub async fn request_download(&self, id: u32) -> ApplicationResult<DownloadTicket> {
        self.library
            .read()
            .await
            .request_download(id)
            .ok_or_else(|| ApplicationError::not_found(format!("resource {}", id)))
    }

    // ========================================
    // Tutoring
    // ========================================

    pub async fn subjects(&self) -> Vec<Subject> {
        self.tutoring.read().await.subjects().to_vec()
    }

    pub async fn tutors_for(&self, subject_id: &str) -> Vec<Tutor> {
        self.tutoring.read().await.tutors_for(subject_id)
    }

    pub async fn upcoming_sessions(&self) -> Vec<TutoringSession> {
        self.tutoring.read().await.upcoming_sessions().to_vec()
    }

    pub async fn book_session(
        &self,
        tutor_id: u32,
        topic: &str,
    ) -> ApplicationResult<TutoringSession> {
        let booked = self
            .tutoring
            .write()
            .await
            .book_session(tutor_id, topic)
            .ok_or_else(|| ApplicationError::not_found(format!("tutor {}", tutor_id)))?;

        info!(tutor = %booked.tutor, topic, "Tutoring session booked");
        Ok(booked)
    }

    pub async fn quick_help(&self) -> &'static str {
        self.tutoring.read().await.quick_help()
    }

    // ========================================
    // Community
    // ========================================

    pub async fn forum_categories(&self) -> Vec<ForumCategory> {
        self.community.read().await.categories().to_vec()
    }

    pub async fn discussions(&self, category: &str) -> Vec<Discussion> {
        self.community.read().await.discussions(category)
    }

    pub async fn expert_sessions(&self) -> Vec<ExpertSession> {
        self.community.read().await.expert_sessions().to_vec()
    }

    /// Post a question under the current user's name
    pub async fn ask_question(
        &self,
        question: &str,
        category: &str,
    ) -> ApplicationResult<Discussion> {
        let author = self
            .display_name()
            .await?
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

        let posted = self
            .community
            .write()
            .await
            .ask_question(question, category, &author)?;

        info!(id = posted.id, category, "Question posted");
        Ok(posted)
    }

    pub async fn join_session(&self, session_id: u32) -> ApplicationResult<JoinOutcome> {
        self.community
            .read()
            .await
            .join_session(session_id)
            .ok_or_else(|| ApplicationError::not_found(format!("expert session {}", session_id)))
    }

    // ========================================
    // Profile
    // ========================================

    /// Current profile state
    pub async fn profile(&self) -> Profile {
        self.profile.read().await.clone()
    }

    pub async fn update_setting(&self, setting: Setting, value: bool) -> Settings {
        let mut profile = self.profile.write().await;
        profile.set(setting, value);
        *profile.settings()
    }

    pub async fn rename(&self, name: &str) -> ApplicationResult<()> {
        self.profile.write().await.rename(name)?;
        Ok(())
    }

    // ========================================
    // Cloud resources
    // ========================================

    /// Append `{title, type, url}` to the resources collection and return the
    /// generated document id
    pub async fn add_resource(&self, resource: &NewResource) -> ZimEduResult<String> {
        let document = serde_json::to_value(resource)?;

        let id = performance::measure_async(
            "add_resource",
            self.store.add(RESOURCES_COLLECTION, document),
        )
        .await?;
        info!(%id, "Resource added");
        Ok(id)
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }
}
