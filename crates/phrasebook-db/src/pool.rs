//! # Database Pool Management
//!
//! The connection provider: one PostgreSQL pool, built once at startup and
//! handed to every repository.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection Pool                           │
//! │                                                                         │
//! │  Process startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::from_env() ← DB_HOST / DB_USER / DB_PASSWORD / DB_NAME      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Connect (failure is fatal) + migrate    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │              PgPool                      │                           │
//! │  │  ┌─────┐ ┌─────┐ ┌─────┐ ┌─────┐       │                           │
//! │  │  │Conn1│ │Conn2│ │Conn3│ │Conn4│ ...   │  (max_connections)        │
//! │  │  └─────┘ └─────┘ └─────┘ └─────┘       │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ Cloned into each service (clone = shared pool)                 │
//! │       ▼                                                                 │
//! │  Request 1 ──► Conn1      Request 2 ──► Conn2      ...                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shutdown: Database::close().await                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a single independent statement; there is no
//! transaction or locking discipline beyond what the pool provides. No
//! retries are performed.

use std::fmt;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::language::LanguageRepository;
use crate::repository::phrase::PhraseRepository;
use crate::repository::translation::TranslationRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("localhost", "postgres", "admin", "phrasebook")
///     .max_connections(20)
///     .connect_timeout(Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,

    /// Default: 5432
    pub port: u16,

    pub user: String,

    pub password: String,

    pub database: String,

    /// Maximum number of connections in the pool.
    /// Default: 10
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 0
    pub min_connections: u32,

    /// How long to wait for a connection before giving up.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

/// Fallbacks used when the environment does not say otherwise.
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "admin";
pub const DEFAULT_DATABASE: &str = "postgres";

impl DbConfig {
    /// Creates a configuration with default pool settings.
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        DbConfig {
            host: host.into(),
            port: DEFAULT_PORT,
            user: user.into(),
            password: password.into(),
            database: database.into(),
            max_connections: 10,
            min_connections: 0,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Reads `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` and
    /// `DB_MAX_CONNECTIONS` from the process environment.
    pub fn from_env() -> DbResult<Self> {
        DbConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DbConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> DbResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mut config = DbConfig::new(
            get("DB_HOST", DEFAULT_HOST),
            get("DB_USER", DEFAULT_USER),
            get("DB_PASSWORD", DEFAULT_PASSWORD),
            get("DB_NAME", DEFAULT_DATABASE),
        );

        if let Some(port) = lookup("DB_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| DbError::InvalidConfig("DB_PORT".to_string()))?;
        }

        if let Some(max) = lookup("DB_MAX_CONNECTIONS") {
            config.max_connections = max
                .trim()
                .parse()
                .ok()
                .filter(|n: &u32| *n > 0)
                .ok_or_else(|| DbError::InvalidConfig("DB_MAX_CONNECTIONS".to_string()))?;
        }

        Ok(config)
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection (acquire) timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(Some(self.idle_timeout))
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig::new(DEFAULT_HOST, DEFAULT_USER, DEFAULT_PASSWORD, DEFAULT_DATABASE)
    }
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout", &self.connect_timeout)
            .field("idle_timeout", &self.idle_timeout)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

// =============================================================================
// Database
// =============================================================================

/// Shared database handle providing repository access.
///
/// Cloning is cheap: clones share the same pool. Construct it once in
/// `main` and pass it to the services that need it.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connects the pool and, if configured, runs migrations.
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError)` - Connection or migration failed; callers treat
    ///   this as fatal at startup
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Initializing database connection"
        );

        let pool = config
            .pool_options()
            .connect_with(config.connect_options())
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Builds the pool without opening any connection.
    ///
    /// Connections are made on first use, so connection errors surface from
    /// the first query instead of from here. Migrations are not run.
    pub fn connect_lazy(config: &DbConfig) -> Self {
        debug!(host = %config.host, port = config.port, "Creating lazy database pool");
        let pool = config.pool_options().connect_lazy_with(config.connect_options());
        Database { pool }
    }

    /// Runs database migrations. Idempotent.
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns the language repository.
    pub fn languages(&self) -> LanguageRepository {
        LanguageRepository::new(self.pool.clone())
    }

    /// Returns the phrase repository.
    pub fn phrases(&self) -> PhraseRepository {
        PhraseRepository::new(self.pool.clone())
    }

    /// Returns the translation repository.
    pub fn translations(&self) -> TranslationRepository {
        TranslationRepository::new(self.pool.clone())
    }

    /// Closes the pool. After this, every repository operation fails.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
