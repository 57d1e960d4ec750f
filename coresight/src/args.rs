use std::path::PathBuf;

use clap::{Parser, Subcommand};
use coresight_client::Package;

/// Coresight messaging API client
#[derive(Debug, Parser)]
#[command(name = "coresight", about = "Command-line client for the Coresight messaging API")]
pub struct Args {
    /// Path to a TOML file with `base_url` and `api_key`
    #[arg(short, long, env = "CORESIGHT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the deployed API, overrides the config file
    #[arg(long, env = "CORESIGHT_BASE_URL")]
    pub base_url: Option<String>,

    /// API key sent as `x-api-key`, overrides the config file
    #[arg(long, env = "CORESIGHT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Use the project-scoped API, where the key selects the project
    #[arg(long)]
    pub scoped: bool,

    /// Log filter directive
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the API is up
    Health,

    /// Register a new client account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "Free")]
        package: Package,
    },

    /// Authenticate a client account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Manage client accounts
    #[command(subcommand)]
    Client(ClientCommand),

    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Manage users
    #[command(subcommand)]
    User(UserCommand),

    /// Manage threads
    #[command(subcommand)]
    Thread(ThreadCommand),

    /// Manage messages
    #[command(subcommand)]
    Message(MessageCommand),

    /// Manage message feedback
    #[command(subcommand)]
    Feedback(FeedbackCommand),

    /// Send a prompt to the client's LLM
    Chat {
        #[arg(long)]
        client: String,
        /// Continue an existing thread
        #[arg(long)]
        thread: Option<String>,
        input: String,
    },

    /// Manage billing subscriptions
    #[command(subcommand)]
    Subscription(SubscriptionCommand),
}

#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "Free")]
        package: Package,
    },
    Get {
        client_id: String,
    },
    Update {
        client_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        package: Package,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    Create {
        #[arg(long)]
        name: String,
        /// LLM settings as a JSON object
        #[arg(long, default_value = "{}")]
        llm_config: String,
    },
    Get {
        project_id: String,
    },
    List,
    /// Project owning the API key
    Current,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    CreateAnonymous {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        session: String,
    },
    CreateAuthenticated {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        /// Extra attributes as a JSON object
        #[arg(long)]
        metadata: Option<String>,
    },
    /// Look users up by email (project-scoped API only)
    Find {
        email: String,
    },
    List {
        #[arg(long)]
        project: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ThreadCommand {
    Create {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        user: String,
    },
    Get {
        #[arg(long)]
        project: Option<String>,
        thread_id: String,
    },
    List {
        #[arg(long)]
        project: Option<String>,
        /// Owner of the threads (project-scoped API only)
        #[arg(long)]
        user: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum MessageCommand {
    Create {
        #[arg(long)]
        project: Option<String>,
        /// Thread owner (project-scoped API only)
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        thread: String,
        #[arg(long)]
        sender: String,
        content: String,
    },
    List {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        thread: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum FeedbackCommand {
    Add {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        message: String,
        #[arg(long)]
        user: String,
        #[arg(long)]
        rating: i32,
        #[arg(long, default_value = "")]
        comment: String,
    },
    List {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        message: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SubscriptionCommand {
    Create {
        #[arg(long)]
        client: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        plan: Package,
    },
    Update {
        #[arg(long)]
        client: String,
        subscription_id: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        plan: Package,
    },
    Cancel {
        #[arg(long)]
        client: String,
        subscription_id: String,
    },
}
