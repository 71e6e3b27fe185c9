//! Pages through adoptable dogs in the terminal using the blocking client.
//!
//! ```sh
//! PETFINDER_KEY=... PETFINDER_SECRET=... RUST_LOG=adoptfinder=info cargo run --example browse -- --age adult
//! ```

use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;

use adoptfinder::client::blocking::Client;
use adoptfinder::config::Config;
use adoptfinder::session::{self, SessionEvent};
use adoptfinder::view::{AgeFilter, Command, ViewState};
use clap::Parser;
use crossbeam::channel;

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

enum Input {
    Session(SessionEvent),
    Line(String),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }
    let client = Arc::new(Client::new(config));

    let mut view = ViewState::new();
    view.set_age_filter(args.age.parse::<AgeFilter>().unwrap_or_default());

    let (sender, inputs) = channel::unbounded();

    let session_events = session::blocking::spawn(client);
    let session_sender = sender.clone();
    thread::spawn(move || {
        for event in session_events {
            if session_sender.send(Input::Session(event)).is_err() {
                break;
            }
        }
    });

    thread::spawn(move || {
        for line in io::stdin().lock().lines().map_while(Result::ok) {
            if sender.send(Input::Line(line)).is_err() {
                break;
            }
        }
    });

    redraw(&view);

    for input in inputs {
        match input {
            Input::Session(event) => view.apply(event),
            Input::Line(line) => match line.parse::<Command>() {
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
        }
        redraw(&view);
    }

    Ok(())
}

fn redraw(view: &ViewState) {
    println!("\n{}\n", view.render());
    println!("commands: [n]ext, [a]ge <Baby|Young|Adult|Senior|all>, [s]earch <text>, [q]uit");
}
