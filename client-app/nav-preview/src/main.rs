use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

use nav_core::ports::{Navigator, SessionManager};
use nav_core::services::{ExpansionState, NavigationShell, SelectOutcome};
use nav_core::{
    MenuGraph, MenuItem, NavigationIntent, ResolvedTab, SessionContext, User,
};
use nav_shared::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "nav-preview",
    version,
    about = "Preview the role-scoped menu and tab bar"
)]
struct Args {
    /// Role code of the signed-in user (admin, service_provider, referral_partner, client)
    #[arg(long)]
    role: String,

    /// Display name of the preview user
    #[arg(long, default_value = "Preview User")]
    name: String,

    /// Menu graph JSON file; overrides navigation.menu_graph_path
    #[arg(long)]
    menu: Option<String>,

    /// Selections to replay in order: "Group", "Group/Child" or "tab:RoleTab1"
    #[arg(long = "select")]
    selections: Vec<String>,

    /// Send a logout after the replayed selections
    #[arg(long)]
    logout: bool,
}

/// Logs intents instead of routing
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        info!(route_id = %intent.route_id, "navigate");
    }
}

struct LoggingSession;

impl SessionManager for LoggingSession {
    fn logout(&self) {
        info!("logout");
    }
}

#[derive(Serialize)]
struct Preview<'a> {
    user: &'a str,
    role: &'a str,
    role_label: Option<&'static str>,
    menu: &'a [MenuItem],
    tabs: [ResolvedTab; 5],
    outcomes: Vec<SelectOutcome>,
    expansion: &'a ExpansionState,
}

fn replay(shell: &mut NavigationShell<LoggingNavigator, LoggingSession>, selection: &str) -> SelectOutcome {
    if let Some(slot) = selection.strip_prefix("tab:") {
        return shell.select_tab_by_name(slot);
    }
    match selection.split_once('/') {
        Some((parent, child)) => shell.select_child(parent, child),
        None => shell.select_item(selection),
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize telemetry
    nav_shared::telemetry::init_telemetry(&config.telemetry)?;

    info!("{} starting ({})", config.app.name, config.app.env);

    let menu_path = args.menu.as_deref().or(config.navigation.menu_graph_path.as_deref());
    let graph = match MenuGraph::load_checked(menu_path.map(Path::new), config.navigation.strict_validation) {
        Ok(graph) => graph,
        Err(e) => {
            error!("Failed to load menu graph: {:#}", e);
            std::process::exit(1);
        }
    };

    let user = User::with_role_code(args.name.as_str(), "preview@localhost", args.role.as_str());
    let mut shell = NavigationShell::new(
        SessionContext::new(user),
        &graph,
        Arc::new(LoggingNavigator),
        Arc::new(LoggingSession),
    );

    let outcomes: Vec<SelectOutcome> = args
        .selections
        .iter()
        .map(|selection| replay(&mut shell, selection))
        .collect();

    if args.logout {
        shell.logout();
    }

    let preview = Preview {
        user: &args.name,
        role: &args.role,
        role_label: shell.role().map(|role| role.label()),
        menu: shell.menu(),
        tabs: shell.tab_bar(),
        outcomes,
        expansion: shell.expansion(),
    };
    println!("{}", serde_json::to_string_pretty(&preview)?);

    Ok(())
}
