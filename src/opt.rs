use clap::{ArgAction, Parser};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Redirect request paths to URLs listed in a mapping file
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Options {
    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(
        default_value = "0.0.0.0:8080",
        help = "Socket address to listen on (--help for more)",
        long_help = r"Socket address to listen on:
    - incoming http connections are received on this socket
Examples:
    - 127.0.0.1:3000
    - 0.0.0.0:80
    - [2001:db8::1]:8080"
    )]
    pub listen: SocketAddr,

    #[arg(
        short,
        long,
        default_value = "./mappings.yaml",
        help = "YAML file of paths to redirect (--help for more)",
        long_help = r"YAML file of paths to redirect:
    - a list of entries, each with a `path` and a `url`
    - paths must match the request path and query exactly
    - a path listed more than once redirects to its last url
    - entries here take precedence over the built-in redirects
Example:
    - path: /urlshort
      url: https://github.com/gophercises/urlshort"
    )]
    pub mappings: PathBuf,
}
