//! Pages through adoptable dogs in the terminal using the async client.
//!
//! ```sh
//! PETFINDER_KEY=... PETFINDER_SECRET=... cargo run --features async --example async_browse
//! ```

use std::sync::Arc;

use adoptfinder::client::r#async::Client;
use adoptfinder::config::Config;
use adoptfinder::session;
use adoptfinder::view::{AgeFilter, Command, ViewState};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(about = "Page through adoptable dogs near Miami, FL")]
struct Args {
    /// Initial age filter: Baby, Young, Adult or Senior
    #[arg(long, default_value = "")]
    age: String,

    /// Overrides the API base URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }
    let client = Arc::new(Client::new(config));

    let mut view = ViewState::new();
    view.set_age_filter(args.age.parse::<AgeFilter>().unwrap_or_default());

    let mut events = session::spawn(client);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut session_open = true;

    redraw(&view);

    loop {
        tokio::select! {
            event = events.recv(), if session_open => match event {
                Some(event) => view.apply(event),
                None => {
                    session_open = false;
                    continue;
                }
            },
            line = lines.next_line() => match line? {
                Some(line) => match line.parse::<Command>() {
                    Ok(command) => {
                        if !view.handle(command) {
                            break;
                        }
                    }
                    Err(err) => {
                        eprintln!("{err}");
                        continue;
                    }
                },
                None => break,
            },
        }
        redraw(&view);
    }

    Ok(())
}

fn redraw(view: &ViewState) {
    println!("\n{}\n", view.render());
    println!("commands: [n]ext, [a]ge <Baby|Young|Adult|Senior|all>, [s]earch <text>, [q]uit");
}
