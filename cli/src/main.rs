mod output;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pantry_core::search::ALL;
use pantry_core::suggest::suggest_ingredients;
use pantry_core::{
    clamp_max_time, filter_recipes, match_recipes, quick_search, DemoAuthenticator, Difficulty,
    Favorites, InMemoryRecipeStore, MatchOutcome, PantryConfig, Privacy, ProfileSummary,
    RecipeDraft, RecipeRepository, SearchFilter, SeedData, SessionProvider, User,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Browse, search and match recipes", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, optionally narrowed by title or tag
    List {
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Show one recipe
    Show { id: String },
    /// Search by text, cuisine, difficulty and cook time
    Search {
        #[arg(long, default_value = "")]
        query: String,
        /// Cuisine name or "All"
        #[arg(long, default_value = ALL)]
        cuisine: String,
        /// Easy, Medium, Hard or "All"
        #[arg(long, default_value = ALL)]
        difficulty: String,
        /// Minutes, clamped to 0-120
        #[arg(long, default_value = "120")]
        max_time: String,
    },
    /// Rank recipes by the ingredients you have
    Cook {
        /// Ingredients on hand (e.g., chicken tomato "soy sauce")
        ingredients: Vec<String>,
    },
    /// Suggest ingredient names to cook with
    Suggest {
        /// Number of suggestions (default: from PANTRY_SUGGESTION_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show a user's recipes and favorites
    Profile {
        #[arg(long, default_value = "user1")]
        user: String,
        /// Recipe id to add to favorites first (repeatable)
        #[arg(long)]
        favorite: Vec<String>,
        /// Recipe id to remove from favorites first (repeatable)
        #[arg(long)]
        unfavorite: Vec<String>,
    },
    /// Validate a new recipe and add it to the in-memory store
    Add {
        #[arg(long)]
        title: String,
        /// Ingredient line (repeatable)
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// Step (repeatable)
        #[arg(long = "step")]
        steps: Vec<String>,
        #[arg(long, default_value = "")]
        cook_time: String,
        #[arg(long, default_value = "Easy")]
        difficulty: String,
        #[arg(long, default_value = "")]
        cuisine: String,
        /// Comma separated
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long)]
        public: bool,
        #[arg(long, default_value = "user1")]
        user: String,
    },
    /// Walk the session through restore, logout and login
    Session,
}

/// Console logging filtered by RUST_LOG. Logs go to stderr so stdout stays
/// parseable with --json.
fn init_telemetry() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry();
    let cli = Cli::parse();

    let config = PantryConfig::from_env().context("Invalid configuration")?;
    let seed = match &config.seed_path {
        Some(path) => SeedData::from_file(path)
            .with_context(|| format!("Failed to load seed file {}", path.display()))?,
        None => SeedData::builtin(),
    };
    let store = InMemoryRecipeStore::new(seed);
    let json = cli.json;

    match cli.command {
        Commands::List { query } => {
            let recipes = store.list();
            output::recipe_list(&quick_search(&recipes, &query), json)?;
        }
        Commands::Show { id } => match store.get_by_id(&id) {
            Some(recipe) => output::recipe_detail(&recipe, json)?,
            None => bail!("Recipe not found: {}", id),
        },
        Commands::Search {
            query,
            cuisine,
            difficulty,
            max_time,
        } => {
            let filter = SearchFilter {
                query,
                cuisine: SearchFilter::parse_cuisine(&cuisine),
                difficulty: parse_difficulty_choice(&difficulty)?,
                max_time: clamp_max_time(&max_time),
            };
            let recipes = store.list();
            output::recipe_list(&filter_recipes(&recipes, &filter), json)?;
        }
        Commands::Cook { ingredients } => {
            let recipes = store.list();
            match match_recipes(&recipes, &ingredients) {
                MatchOutcome::Ranked(matches) => output::match_list(&matches, json)?,
                outcome => eprintln!("{}", outcome.notice().unwrap_or_default()),
            }
        }
        Commands::Suggest { limit } => {
            let recipes = store.list();
            let limit = limit.unwrap_or(config.suggestion_limit);
            output::lines(&suggest_ingredients(&recipes, limit), json)?;
        }
        Commands::Profile {
            user,
            favorite,
            unfavorite,
        } => {
            let user = store
                .get_user(&user)
                .with_context(|| format!("Unknown user: {}", user))?;
            profile(&store, &user, &favorite, &unfavorite, json)?;
        }
        Commands::Add {
            title,
            ingredients,
            steps,
            cook_time,
            difficulty,
            cuisine,
            tags,
            image,
            public,
            user,
        } => {
            let draft = RecipeDraft {
                title,
                ingredients,
                steps,
                cook_time,
                difficulty: Difficulty::from_str(&difficulty)
                    .with_context(|| format!("Unknown difficulty: {}", difficulty))?,
                cuisine,
                tags,
                image,
                privacy: if public {
                    Privacy::Public
                } else {
                    Privacy::Private
                },
            };
            let recipe = draft
                .into_recipe(Uuid::new_v4().to_string(), user)
                .context("Please fill in all required fields")?;
            let recipe = store.create(recipe)?;
            output::recipe_detail(&recipe, json)?;
        }
        Commands::Session => {
            session(&config).await;
        }
    }

    Ok(())
}

fn parse_difficulty_choice(choice: &str) -> Result<Option<Difficulty>> {
    if choice.trim().eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    match SearchFilter::parse_difficulty(choice) {
        Some(d) => Ok(Some(d)),
        None => bail!("Unknown difficulty: {} (expected All, Easy, Medium or Hard)", choice),
    }
}

fn profile(
    store: &InMemoryRecipeStore,
    user: &User,
    add: &[String],
    remove: &[String],
    json: bool,
) -> Result<()> {
    let mut favorites = Favorites::for_user(user);
    for id in add {
        favorites.add(id);
    }
    for id in remove {
        favorites.remove(id);
    }

    let summary = ProfileSummary::build(user.profile(), &favorites, store);
    output::profile(&summary, json)
}

async fn session(config: &PantryConfig) {
    let authenticator = DemoAuthenticator::new(config.auth_delay);
    let mut session = SessionProvider::new(Box::new(authenticator));
    println!("start: {}", session.route().as_str());

    if let Err(e) = session.restore().await {
        println!("restore failed: {}", e);
    }
    report(&session, "restore");

    session.logout();
    report(&session, "logout");

    session.login(None);
    report(&session, "login");
}

fn report(session: &SessionProvider, step: &str) {
    match session.profile() {
        Some(profile) => println!(
            "{}: {} ({} <{}>)",
            step,
            session.route().as_str(),
            profile.name,
            profile.email
        ),
        None => println!("{}: {}", step, session.route().as_str()),
    }
}
