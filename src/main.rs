mod config;
mod error;
mod handlers;
mod model;
mod store;
mod views;

use std::process;

use clap::Parser;
use iron::prelude::Chain;
use iron::Iron;
use log::{error, info, warn};
use logger::Logger;
use mount::Mount;
use router::Router;
use staticfile::Static;

use config::Config;
use handlers::Handlers;
use store::PostStore;

fn build_chain(store: PostStore, config: &Config) -> Chain {
    let (logger_before, logger_after) = Logger::new(None);
    let handlers = Handlers::new(store, config.render_mode);

    let mut router = Router::new();
    router.get("/", handlers.home.clone(), "home");
    router.get("/posts", handlers.home, "posts");
    router.get("/about", handlers.about, "about");
    router.get("/api/posts", handlers.api_posts, "api_posts");

    let mut mount = Mount::new();
    mount.mount("/", router);
    mount.mount("/static/", Static::new(&config.static_dir));

    let mut chain = Chain::new(mount);
    chain.link_before(logger_before); // Should be first!
    chain.link_after(logger_after); // Should be last!
    chain
}

// RUST_LOG=logger=info,postboard=info postboard --render-mode list
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let store = match PostStore::seeded() {
        Ok(store) => store,
        Err(e) => {
            error!("could not build the post store: {}", e);
            process::exit(1);
        }
    };
    if store.is_empty() {
        warn!("post store is empty");
    }
    info!("serving {} posts in {:?} mode", store.len(), config.render_mode);

    let chain = build_chain(store, &config);
    match Iron::new(chain).http(config.addr.as_str()) {
        Ok(_listening) => info!("listening on {}", config.addr),
        Err(e) => {
            error!("could not listen on {}: {}", config.addr, e);
            process::exit(1);
        }
    }
}
