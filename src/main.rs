use clap::{Parser, Subcommand};
use log::{error, info};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

use cooking_guide::{GuideConfig, GuideError, HttpRecipeApi, Session, View, ViewController};

#[derive(Parser, Debug)]
#[command(name = "cooking-guide", version, about = "Browse recipes and cook them step by step")]
struct Cli {
    /// Recipe service base URL (overrides config and COOKING_GUIDE__BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print HTML fragments instead of plain text
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every available recipe
    List,
    /// Load a recipe and walk through its steps
    Cook {
        name: String,
        /// Print every step without waiting for Enter
        #[arg(long)]
        all: bool,
    },
    /// Ask the cooking assistant a question
    Ask {
        question: String,
        /// Recipe the question is about
        #[arg(long)]
        recipe: Option<String>,
    },
    /// Line-oriented session (default)
    Interactive,
}

type Input = Lines<BufReader<Stdin>>;

const HELP: &str = "\
Commands:
  list              show all recipes
  search <name>     load a recipe
  start             start cooking the loaded recipe
  next              go to the next step
  ask <question>    ask the cooking assistant
  debug             show connection info
  help              show this help
  quit              leave";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = GuideConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    info!("Using recipe service at {}", config.base_url);

    let api = HttpRecipeApi::builder().config(&config).build()?;
    let controller = ViewController::new(api);
    let mut session = Session::new();
    let mut input = BufReader::new(io::stdin()).lines();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::List => show(&controller.list_recipes().await?, cli.html),
        Command::Cook { name, all } => {
            let overview = controller.search_recipe(&mut session, &name).await?;
            show(&overview, cli.html);
            if matches!(overview, View::RecipeOverview { .. }) {
                cook(&controller, &mut session, &mut input, all, cli.html).await?;
            }
        }
        Command::Ask { question, recipe } => {
            let view = controller.ask_ai(&question, recipe.as_deref()).await?;
            show(&view, cli.html);
        }
        Command::Interactive => {
            interactive(&controller, &mut session, &mut input, cli.html).await?;
        }
    }

    Ok(())
}

fn show(view: &View, html: bool) {
    if html {
        println!("{}", view.to_html());
    } else {
        println!("{}\n", view);
    }
}

async fn cook(
    controller: &ViewController<HttpRecipeApi>,
    session: &mut Session,
    input: &mut Input,
    all: bool,
    html: bool,
) -> Result<(), GuideError> {
    let mut view = controller.start_cooking(session);
    loop {
        show(&view, html);
        if !matches!(view, View::Step { .. }) {
            return Ok(());
        }
        if !all && input.next_line().await?.is_none() {
            return Ok(());
        }
        view = controller.next_step(session);
    }
}

async fn interactive(
    controller: &ViewController<HttpRecipeApi>,
    session: &mut Session,
    input: &mut Input,
    html: bool,
) -> Result<(), GuideError> {
    // Context for `ask` is whatever was last typed into search, loaded or not
    let mut last_search = String::new();
    println!("{}\n", HELP);

    loop {
        let mut stdout = io::stdout();
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = input.next_line().await? else {
            return Ok(());
        };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        let result = match command {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "help" => {
                println!("{}\n", HELP);
                continue;
            }
            "list" | "all" => controller.list_recipes().await,
            "search" => {
                last_search = rest.trim().to_string();
                controller.search_recipe(session, rest).await
            }
            "start" => Ok(controller.start_cooking(session)),
            "next" => Ok(controller.next_step(session)),
            "ask" => controller.ask_ai(rest, Some(last_search.as_str())).await,
            "debug" => Ok(controller.debug_info()),
            other => Ok(View::alert(format!(
                "Unknown command '{}'. Type 'help' for commands.",
                other
            ))),
        };

        match result {
            Ok(view) => show(&view, html),
            Err(e) => error!("{}", e),
        }
    }
}
