use tasko_client::command::HELP;
use tasko_client::{BoardController, ClientConfig, Command, CommandError, HttpTodoGateway, render};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Tasko - Starting Client");

    let mut controller = BoardController::new(HttpTodoGateway::new(&config));
    println!("{}", render(controller.board()));

    controller.load().await;
    println!("{}", render(controller.board()));
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line, controller.board().is_editing()) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                println!("{HELP}");
                continue;
            }
            Ok(Command::Add(title)) => {
                controller.set_draft_title(title);
                controller
                    .submit_with(|board| println!("{}", render(board)))
                    .await;
            }
            Ok(command) => {
                if let Err(error) = controller.execute(command).await {
                    println!("{error}");
                }
            }
            Err(CommandError::Empty) => {}
            Err(error) => {
                println!("{error}");
                continue;
            }
        }
        println!("{}", render(controller.board()));
    }

    Ok(())
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tasko_client=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
