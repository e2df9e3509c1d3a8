//! ZimEdu CLI - Command-line interface for ZimEdu
//!
//! Browse the mock catalog, try the mock session flows and write cloud
//! resources from a terminal.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zimedu_applications::{
    ApplicationError, JoinOutcome, NewResource, SessionManager, SignInForm, SignUpForm,
    ZimEduApplication, ALL_CATEGORIES, DEFAULT_QUESTION_CATEGORY,
};
use zimedu_core::{
    init_logging, log_operation_error, log_operation_start, log_operation_success, LoggingConfig,
    Role, User, ZimEduConfig, ZimEduResult,
};

/// Config file looked up in the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "zimedu.toml";

#[derive(Parser)]
#[command(name = "zimedu")]
#[command(about = "Learning resources, tutoring and community for Zimbabwean students")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the resource library
    Resources {
        /// Title substring, case-insensitive
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category id (all, textbooks, videos, quizzes, worksheets)
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,
    },

    /// Download a resource from the library
    Download {
        /// Resource id
        id: u32,
    },

    /// List tutors
    Tutors {
        /// Subject id (math, science, english, ...); omit for every tutor
        #[arg(short, long, default_value = "")]
        subject: String,
    },

    /// Book a tutoring session
    Book {
        /// Tutor id
        tutor_id: u32,

        /// What the session should cover
        topic: String,
    },

    /// Get connected to any available tutor
    QuickHelp,

    /// List community discussions
    Discussions {
        /// Category id (all, homework, study-tips, exams, career, parents)
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// Ask the community a question
    Ask {
        /// The question
        question: String,

        /// Category to post in
        #[arg(short, long, default_value = DEFAULT_QUESTION_CATEGORY)]
        category: String,
    },

    /// List live and upcoming expert sessions
    Experts,

    /// Join an expert session
    Join {
        /// Expert session id
        id: u32,
    },

    /// Sign in (any email and password work)
    SignIn {
        email: String,
        password: String,
    },

    /// Create an account
    SignUp {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Must repeat the password
        #[arg(long)]
        confirm_password: String,

        /// student, parent or teacher
        #[arg(long, default_value = "student")]
        role: Role,
    },

    /// Show the profile, settings and achievements
    Profile,

    /// Add a resource to the cloud resources collection
    AddResource {
        #[arg(long)]
        title: Option<String>,

        /// Resource type (textbook, video, ...)
        #[arg(long = "type")]
        resource_type: Option<String>,

        #[arg(long)]
        url: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Write the default configuration
        #[arg(long)]
        init: bool,

        /// Validate current configuration
        #[arg(long)]
        validate: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig::cli(cli.verbose))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Starting ZimEdu CLI v{}", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Err(e) => match e.downcast_ref::<ApplicationError>() {
            Some(app_error) if app_error.is_fatal() => {
                eprintln!("💥 Fatal: {}", app_error);
                std::process::exit(1);
            }
            _ => Err(e),
        },
        ok => ok,
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone();

    if let Commands::Config {
        show,
        init,
        validate,
    } = cli.command
    {
        return handle_config(config_path.as_deref(), show, init, validate);
    }

    let config = load_config(config_path.as_deref())?;
    let app = ZimEduApplication::new(config)?;

    match cli.command {
        Commands::Resources { search, category } => {
            let resources = app.search_resources(&search, &category).await;
            if resources.is_empty() {
                println!("No resources found");
            }
            for resource in resources {
                println!(
                    "{} [{}] {} · {} · {} · ⭐ {} · {} downloads",
                    resource.resource_type.icon(),
                    resource.id,
                    resource.title,
                    resource.subject,
                    resource.grade,
                    resource.rating,
                    resource.downloads
                );
            }
        }
        Commands::Download { id } => {
            let ticket = app.request_download(id).await?;
            println!("⬇️  {}", ticket.message);
        }
        Commands::Tutors { subject } => {
            for tutor in app.tutors_for(&subject).await {
                println!(
                    "👨‍🏫 [{}] {} · {} · ⭐ {} · {} · {} · {}",
                    tutor.id,
                    tutor.name,
                    tutor.subject,
                    tutor.rating,
                    tutor.experience,
                    tutor.price,
                    tutor.availability
                );
                println!("     {}", tutor.specialties.join(", "));
            }
        }
        Commands::Book { tutor_id, topic } => {
            log_operation_start!("book_session", tutor_id = tutor_id);
            let session = app.book_session(tutor_id, &topic).await.map_err(|e| {
                log_operation_error!("book_session", e, tutor_id = tutor_id);
                e
            })?;
            log_operation_success!("book_session", session_id = session.id);
            println!(
                "✅ Booked \"{}\" with {} ({}, {})",
                session.topic, session.tutor, session.time, session.duration
            );
        }
        Commands::QuickHelp => {
            println!("📞 {}", app.quick_help().await);
        }
        Commands::Discussions { category } => {
            for discussion in app.discussions(&category).await {
                let marker = match (discussion.is_pinned, discussion.is_hot) {
                    (true, _) => "📌",
                    (false, true) => "🔥",
                    _ => "💬",
                };
                println!(
                    "{} [{}] {} · by {} · {} replies · {}",
                    marker,
                    discussion.id,
                    discussion.title,
                    discussion.author,
                    discussion.replies,
                    discussion.last_reply
                );
            }
        }
        Commands::Ask { question, category } => {
            let posted = app.ask_question(&question, &category).await?;
            println!("✅ Posted question #{} in {}", posted.id, posted.category);
        }
        Commands::Experts => {
            for session in app.expert_sessions().await {
                println!(
                    "🎓 [{}] {} · {} · {} · {} participants · {:?}",
                    session.id,
                    session.title,
                    session.expert,
                    session.time,
                    session.participants,
                    session.status
                );
            }
        }
        Commands::Join { id } => match app.join_session(id).await? {
            JoinOutcome::Joining(message) => println!("🔴 {}", message),
            JoinOutcome::ReminderSet(message) => println!("⏰ {}", message),
        },
        Commands::SignIn { email, password } => {
            let form = SignInForm { email, password };
            let user = with_progress(app.session()?, "Signing in", app.sign_in(&form)).await?;
            print_signed_in(&app, &user).await?;
        }
        Commands::SignUp {
            name,
            email,
            password,
            confirm_password,
            role,
        } => {
            let form = SignUpForm {
                name,
                email,
                password,
                confirm_password,
                role,
            };
            let user =
                with_progress(app.session()?, "Creating account", app.sign_up(&form)).await?;
            print_signed_in(&app, &user).await?;
        }
        Commands::Profile => {
            let profile = app.profile().await;
            let stats = profile.stats();
            let name = app
                .display_name()
                .await?
                .unwrap_or_else(|| "Student".to_string());

            println!("👤 {}", name);
            println!(
                "📊 {}/{} courses · {} day streak · {}/{} achievements",
                stats.courses_completed,
                stats.total_courses,
                stats.study_streak,
                profile.unlocked_count(),
                profile.achievements().len()
            );
            for achievement in profile.achievements() {
                println!(
                    "   {} {} ({}%)",
                    achievement.icon,
                    achievement.title,
                    achievement.percent_complete()
                );
            }
            println!("⚙️  {}", serde_json::to_string_pretty(profile.settings())?);
        }
        Commands::AddResource {
            title,
            resource_type,
            url,
        } => {
            let resource = NewResource {
                title,
                resource_type,
                url,
            };
            match app.add_resource(&resource).await {
                Ok(id) => println!("Resource added with ID: {}", id),
                Err(e) => anyhow::bail!("Error adding resource: {}", e.message()),
            }
        }
        Commands::Config { .. } => unreachable!("handled before the application is built"),
    }

    Ok(())
}

/// Print a progress line while the session reports busy
async fn with_progress<F, T>(session: &SessionManager, label: &str, operation: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let mut updates = session.subscribe();
    let label = label.to_string();

    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            if updates.borrow_and_update().busy {
                println!("⏳ {}...", label);
            }
        }
    });

    let result = operation.await;
    watcher.abort();
    result
}

async fn print_signed_in(app: &ZimEduApplication, user: &User) -> anyhow::Result<()> {
    debug!(user = %user.display_string(), "Session established");
    let home = app.home().await?;

    println!("✅ Signed in as {} <{}> ({})", user.name, user.email, user.role);
    println!("[{}] {}", home.avatar_initial, home.greeting);
    println!("    {}", home.tagline);
    Ok(())
}

fn load_config(config_path: Option<&Path>) -> ZimEduResult<ZimEduConfig> {
    if let Some(path) = config_path {
        info!("Loading configuration from {:?}", path);
        return ZimEduConfig::from_file(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        info!("Loading configuration from {:?}", default_path);
        return ZimEduConfig::from_file(default_path);
    }

    info!("No configuration file found, using defaults");
    Ok(ZimEduConfig::default())
}

fn handle_config(
    config_path: Option<&Path>,
    show: bool,
    init: bool,
    validate: bool,
) -> anyhow::Result<()> {
    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    if init {
        ZimEduConfig::default().save_to_file(path)?;
        println!("✅ Configuration initialized at: {:?}", path);
    }

    if show {
        let config = load_config(config_path)?;
        println!("📋 Current configuration:");
        println!(
            "{}",
            toml::to_string_pretty(&config).context("Failed to render configuration")?
        );
    }

    if validate {
        match load_config(config_path) {
            Ok(_) => println!("✅ Configuration is valid"),
            Err(e) => {
                e.log();
                anyhow::bail!("❌ Configuration is invalid: {}", e);
            }
        }
    }

    Ok(())
}
