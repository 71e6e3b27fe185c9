//! A client and terminal view for [Petfinder](https://www.petfinder.com/developers/v2/docs/) adoption listings.
//!
//! On startup the client exchanges its API credentials for a bearer token, then fetches one page of
//! adoptable dogs near Miami, FL. The [view](crate::view) pages through them one at a time with an
//! optional age filter and keeps a searchable history of the pets already seen.
//!
//! Two flavors are provided. The `sync` feature (default) uses a blocking client and runs the
//! startup pipeline on a background thread. The `async` feature uses tokio.
//!
//!```no_run
//!     use adoptfinder::client::blocking::Client;
//!     use adoptfinder::session;
//!     use adoptfinder::view::ViewState;
//!
//!     fn main() -> Result<(), adoptfinder::Error> {
//!         let client = Client::from_env()?;
//!
//!         let mut view = ViewState::with_session(session::blocking::run(&client));
//!         view.next();
//!
//!         println!("{}", view.render());
//!         Ok(())
//!     }
//!```

#[cfg(not(any(feature = "sync", feature = "async")))]
compile_error!("either the `sync` or the `async` feature must be enabled");

/// Adoptable animal records and the listing search.
pub mod animals;

/// OAuth client-credentials token exchange.
pub mod auth;

/// Petfinder API client.
pub mod client;

/// Credentials, endpoints and the listing query.
pub mod config;

mod errors;

pub mod messages;

pub mod prelude;

/// Startup pipeline: token, then listing.
pub mod session;

pub mod transport;

/// View state, event handlers and rendering.
pub mod view;

#[cfg(test)]
pub(crate) mod stubs;


pub use errors::Error;

#[cfg(feature = "async")]
pub use client::r#async::Client;
#[cfg(all(feature = "sync", not(feature = "async")))]
pub use client::sync::Client;
