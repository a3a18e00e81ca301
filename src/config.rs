use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How the home page presents the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Only the first post's title, as a heading.
    Single,
    /// Every post, as a full page.
    List,
}

#[derive(Clone, Debug, Parser)]
#[command(name = "postboard", version, about = "Serves a fixed list of blog posts over HTTP")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "POSTBOARD_ADDR", default_value = "localhost:3000")]
    pub addr: String,

    #[arg(long, env = "POSTBOARD_RENDER_MODE", value_enum, default_value_t = RenderMode::List)]
    pub render_mode: RenderMode,

    /// Directory served under `/static/`.
    #[arg(long, env = "POSTBOARD_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}
