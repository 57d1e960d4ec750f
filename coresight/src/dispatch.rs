use anyhow::{Context, bail};
use coresight_client::{ApiResponse, ClientConfig, CoresightClient, ProjectClient};
use serde_json::{Map, Value};

use crate::args::{
    ClientCommand, Command, FeedbackCommand, MessageCommand, ProjectCommand, SubscriptionCommand, ThreadCommand,
    UserCommand,
};

/// API profile selected on the command line
pub enum Profile {
    Global(CoresightClient),
    Scoped(ProjectClient),
}

impl Profile {
    pub fn connect(config: ClientConfig, scoped: bool) -> anyhow::Result<Self> {
        Ok(if scoped {
            Self::Scoped(ProjectClient::from_config(config)?)
        } else {
            Self::Global(CoresightClient::from_config(config)?)
        })
    }

    fn global(&self, command: &str) -> anyhow::Result<&CoresightClient> {
        match self {
            Self::Global(client) => Ok(client),
            Self::Scoped(_) => bail!("`{command}` is not available with --scoped"),
        }
    }
}

/// Execute one command against the API
pub fn run(profile: &Profile, command: Command) -> anyhow::Result<ApiResponse> {
    let response = match command {
        Command::Health => match profile {
            Profile::Global(client) => client.health_check()?,
            Profile::Scoped(client) => client.health_check()?,
        },
        Command::Signup {
            name,
            email,
            password,
            package,
        } => profile
            .global("signup")?
            .sign_up(&name, &email, &password, package)?,
        Command::Login { email, password } => profile.global("login")?.login(&email, &password)?,
        Command::Client(command) => run_client(profile.global("client")?, command)?,
        Command::Project(command) => run_project(profile, command)?,
        Command::User(command) => run_user(profile, command)?,
        Command::Thread(command) => run_thread(profile, command)?,
        Command::Message(command) => run_message(profile, command)?,
        Command::Feedback(command) => run_feedback(profile, command)?,
        Command::Chat { client, thread, input } => {
            profile
                .global("chat")?
                .chat(&client, &input, thread.as_deref())?
        }
        Command::Subscription(command) => run_subscription(profile.global("subscription")?, command)?,
    };

    Ok(response)
}

fn run_client(client: &CoresightClient, command: ClientCommand) -> anyhow::Result<ApiResponse> {
    let clients = client.clients();

    Ok(match command {
        ClientCommand::Create {
            name,
            email,
            password,
            package,
        } => clients.create(&name, &email, &password, package)?,
        ClientCommand::Get { client_id } => clients.get(&client_id)?,
        ClientCommand::Update {
            client_id,
            name,
            email,
            package,
        } => clients.update(&client_id, &name, &email, package)?,
    })
}

fn run_project(profile: &Profile, command: ProjectCommand) -> anyhow::Result<ApiResponse> {
    if let (ProjectCommand::Current, Profile::Scoped(client)) = (&command, profile) {
        return Ok(client.project()?);
    }

    let projects = profile.global("project")?.projects();

    Ok(match command {
        ProjectCommand::Create { name, llm_config } => {
            let llm_config: Value = serde_json::from_str(&llm_config).context("--llm-config must be JSON")?;
            projects.create(&name, &llm_config)?
        }
        ProjectCommand::Get { project_id } => projects.get(&project_id)?,
        ProjectCommand::List => projects.list()?,
        ProjectCommand::Current => projects.current()?,
    })
}

fn run_user(profile: &Profile, command: UserCommand) -> anyhow::Result<ApiResponse> {
    Ok(match (profile, command) {
        (Profile::Global(client), UserCommand::CreateAnonymous { project, session }) => client
            .users()
            .create_anonymous(&require_project(project)?, &session)?,
        (Profile::Scoped(client), UserCommand::CreateAnonymous { project, session }) => {
            reject_project(project.as_deref())?;
            client.users().create_anonymous(&session)?
        }
        (
            Profile::Global(client),
            UserCommand::CreateAuthenticated {
                project,
                email,
                name,
                metadata,
            },
        ) => {
            let metadata = parse_metadata(metadata.as_deref())?;
            client.users().create_authenticated(
                &require_project(project)?,
                &email,
                &name,
                metadata.as_ref(),
            )?
        }
        (
            Profile::Scoped(client),
            UserCommand::CreateAuthenticated {
                project,
                email,
                name,
                metadata,
            },
        ) => {
            reject_project(project.as_deref())?;
            let metadata = parse_metadata(metadata.as_deref())?;
            client
                .users()
                .create_authenticated(&email, &name, metadata.as_ref())?
        }
        (Profile::Global(_), UserCommand::Find { .. }) => {
            bail!("`user find` requires --scoped")
        }
        (Profile::Scoped(client), UserCommand::Find { email }) => client.users().get(&email)?,
        (Profile::Global(client), UserCommand::List { project }) => {
            client.users().list(&require_project(project)?)?
        }
        (Profile::Scoped(client), UserCommand::List { project }) => {
            reject_project(project.as_deref())?;
            client.users().list()?
        }
    })
}

fn run_thread(profile: &Profile, command: ThreadCommand) -> anyhow::Result<ApiResponse> {
    Ok(match (profile, command) {
        (Profile::Global(client), ThreadCommand::Create { project, user }) => {
            client.threads().create(&require_project(project)?, &user)?
        }
        (Profile::Scoped(client), ThreadCommand::Create { project, user }) => {
            reject_project(project.as_deref())?;
            client.threads().create(&user)?
        }
        (Profile::Global(client), ThreadCommand::Get { project, thread_id }) => {
            client.threads().get(&require_project(project)?, &thread_id)?
        }
        (Profile::Scoped(client), ThreadCommand::Get { project, thread_id }) => {
            reject_project(project.as_deref())?;
            client.threads().get(&thread_id)?
        }
        (Profile::Global(client), ThreadCommand::List { project, .. }) => {
            client.threads().list(&require_project(project)?)?
        }
        (Profile::Scoped(client), ThreadCommand::List { project, user }) => {
            reject_project(project.as_deref())?;
            client.threads().list(&require_user(user)?)?
        }
    })
}

fn run_message(profile: &Profile, command: MessageCommand) -> anyhow::Result<ApiResponse> {
    Ok(match (profile, command) {
        (
            Profile::Global(client),
            MessageCommand::Create {
                project,
                thread,
                sender,
                content,
                ..
            },
        ) => client
            .messages()
            .create(&require_project(project)?, &thread, &sender, &content)?,
        (
            Profile::Scoped(client),
            MessageCommand::Create {
                project,
                user,
                thread,
                sender,
                content,
            },
        ) => {
            reject_project(project.as_deref())?;
            client
                .messages()
                .create(&require_user(user)?, &thread, &sender, &content)?
        }
        (Profile::Global(client), MessageCommand::List { project, thread, .. }) => {
            client.messages().list(&require_project(project)?, &thread)?
        }
        (Profile::Scoped(client), MessageCommand::List { project, user, thread }) => {
            reject_project(project.as_deref())?;
            client.messages().list(&require_user(user)?, &thread)?
        }
    })
}

fn run_feedback(profile: &Profile, command: FeedbackCommand) -> anyhow::Result<ApiResponse> {
    Ok(match (profile, command) {
        (
            Profile::Global(client),
            FeedbackCommand::Add {
                project,
                message,
                user,
                rating,
                comment,
            },
        ) => client
            .feedback()
            .add(&require_project(project)?, &message, &user, rating, &comment)?,
        (
            Profile::Scoped(client),
            FeedbackCommand::Add {
                project,
                message,
                user,
                rating,
                comment,
            },
        ) => {
            reject_project(project.as_deref())?;
            client.feedback().add(&message, &user, rating, &comment)?
        }
        (Profile::Global(client), FeedbackCommand::List { project, message }) => {
            client.feedback().list(&require_project(project)?, &message)?
        }
        (Profile::Scoped(client), FeedbackCommand::List { project, message }) => {
            reject_project(project.as_deref())?;
            client.feedback().list(&message)?
        }
    })
}

fn run_subscription(client: &CoresightClient, command: SubscriptionCommand) -> anyhow::Result<ApiResponse> {
    let subscriptions = client.subscriptions();

    Ok(match command {
        SubscriptionCommand::Create { client, price, plan } => subscriptions.create(&client, &price, plan)?,
        SubscriptionCommand::Update {
            client,
            subscription_id,
            price,
            plan,
        } => subscriptions.update(&client, &subscription_id, &price, plan)?,
        SubscriptionCommand::Cancel {
            client,
            subscription_id,
        } => subscriptions.cancel(&client, &subscription_id)?,
    })
}

fn require_project(project: Option<String>) -> anyhow::Result<String> {
    project.context("--project is required without --scoped")
}

fn require_user(user: Option<String>) -> anyhow::Result<String> {
    user.context("--user is required with --scoped")
}

fn reject_project(project: Option<&str>) -> anyhow::Result<()> {
    if project.is_some() {
        bail!("--project cannot be combined with --scoped, the API key selects the project");
    }
    Ok(())
}

fn parse_metadata(raw: Option<&str>) -> anyhow::Result<Option<Map<String, Value>>> {
    raw.map(|raw| serde_json::from_str(raw).context("--metadata must be a JSON object"))
        .transpose()
}
