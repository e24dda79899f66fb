use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use clap::Parser;
use log::error;

use tinws::conn::Connection;
use tinws::pump::{self, SessionEnd};

/// Minimal interactive websocket client.
#[derive(Parser, Debug)]
#[command(name = "tinws", version, about)]
struct Args {
    /// Server host
    #[arg(default_value = "172.86.105.168")]
    host: String,

    /// Server port
    #[arg(default_value_t = 8080)]
    port: u16,

    /// Request path
    #[arg(default_value = "/")]
    path: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    println!("Connecting to {}:{}{}...", args.host, args.port, args.path);

    let mut conn = match Connection::open(&args.host, args.port, &args.path) {
        Ok(conn) => conn,
        Err(e) => {
            error!("failed to connect: {}", e);
            return ExitCode::from(1);
        }
    };

    println!("Connected! Commands:");
    println!("  'file:<filepath>:<url>' - send a file with url");
    println!("  [any text] - send text message");
    println!("  [empty line] - exit");

    // feed console lines to the pump without blocking it;
    // a dropped sender (stdin EOF) ends the session like an empty line
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            let quit = line.is_empty();
            if tx.send(line).is_err() || quit {
                break;
            }
        }
    });

    let end = pump::run(&mut conn, &rx, |payload| {
        println!("Received: {}", String::from_utf8_lossy(payload));
    });

    if end == SessionEnd::PeerClosed {
        println!("Connection closed by server");
    }

    conn.close();
    println!("Disconnected");
    ExitCode::SUCCESS
}
