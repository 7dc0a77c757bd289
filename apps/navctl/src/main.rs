use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nav_core::{
    active_bindings, dispatch, evaluate, load_settings, resolve, GestureContext,
    HttpAuthProvider, RouteTable, SessionStore,
};
use shared::domain::{Role, SessionSnapshot, SwipeDirection};

#[derive(Parser, Debug)]
#[command(about = "Exercise the shell's navigation decisions from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Treat the session as logged in.
    #[arg(long)]
    authenticated: bool,
    /// Treat the session as email-verified (implies --authenticated).
    #[arg(long)]
    verified: bool,
    #[arg(long)]
    admin: bool,
    #[arg(long)]
    course: Option<String>,
    #[arg(long)]
    semester: Option<u8>,
}

impl SessionArgs {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_authenticated: self.authenticated || self.verified,
            is_verified: self.verified,
            role: if self.admin { Role::Admin } else { Role::User },
            course: self.course.clone(),
            semester: self.semester,
        }
        .normalized()
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the route guard for a path.
    Route {
        path: String,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Resolve a keyboard chord.
    Chord {
        chord: String,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Dispatch a swipe gesture.
    Swipe {
        /// "left" or "right".
        direction: String,
        #[arg(long, default_value = "/")]
        path: String,
        #[arg(long)]
        panel_open: bool,
        #[arg(long)]
        mobile: bool,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// List the shortcuts this session may use.
    Bindings {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Run the startup session check against a live auth endpoint.
    Whoami {
        #[arg(long)]
        server_url: Option<String>,
        /// Session token to send as the portal's cookie.
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();
    let table = RouteTable::shell();

    match cli.command {
        Command::Route { path, session } => {
            let decision = evaluate(&table, &path, &session.snapshot());
            println!("{decision:?}");
        }
        Command::Chord { chord, session } => match resolve(&chord, &session.snapshot()) {
            Some(action) => println!("{}", serde_json::to_string(&action)?),
            None => println!("no binding for {chord:?}"),
        },
        Command::Swipe {
            direction,
            path,
            panel_open,
            mobile,
            session,
        } => {
            let direction = match direction.to_ascii_lowercase().as_str() {
                "left" => SwipeDirection::Left,
                "right" => SwipeDirection::Right,
                other => anyhow::bail!("unknown swipe direction {other:?}"),
            };
            let ctx = GestureContext {
                panel_open,
                current_path: path,
                is_mobile: mobile,
            };
            match dispatch(&table, direction, &ctx, &session.snapshot()) {
                Some(action) => println!("{}", serde_json::to_string(&action)?),
                None => println!("no effect"),
            }
        }
        Command::Bindings { session } => {
            for binding in active_bindings(&session.snapshot()) {
                println!("{:8} {}", binding.chord, binding.label);
            }
        }
        Command::Whoami { server_url, token } => {
            let settings = load_settings();
            let base_url = server_url.unwrap_or(settings.auth_base_url.clone());
            let mut provider = HttpAuthProvider::new(base_url)?;
            if let Some(token) = token {
                provider = provider.with_session_token(token);
            }
            let store = SessionStore::new();
            match store
                .initialize(&provider, settings.session_check_timeout())
                .await
            {
                Ok(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                Err(err) => println!("session check failed ({err}); continuing anonymously"),
            }
        }
    }

    Ok(())
}
