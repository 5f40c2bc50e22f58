//! Debug harness: record to / play from a raw scratch file, or loop the
//! microphone straight into the speakers.

use anyhow::Result;
use tokio::signal;

use pacat_io::{Pacat, PacatConfig, SampleFormat, Session};

const TMP_DIR: &str = "debug/tmp";
const FILE_PATH: &str = "debug/tmp/audio.raw";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Play,
    Record,
    Feedback,
}

impl Mode {
    fn parse(arg: &str) -> Option<Self> {
        match arg {
            "p" | "play" => Some(Mode::Play),
            "r" | "record" => Some(Mode::Record),
            "f" | "feedback" => Some(Mode::Feedback),
            _ => None,
        }
    }
}

fn usage() {
    eprintln!("usage:\tpacat_io <play|record|feedback>");
}

/// Hold the session open until Ctrl+C, then close it.
async fn run_until_ctrl_c(session: Session) -> Result<()> {
    signal::ctrl_c().await?;
    println!("Received Ctrl+C, shutting down...");
    session.close().await
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mode = match std::env::args().nth(1).as_deref().and_then(Mode::parse) {
        Some(mode) => mode,
        None => {
            usage();
            std::process::exit(1);
        }
    };

    std::fs::create_dir_all(TMP_DIR)?;

    let pacat = Pacat::new(PacatConfig::with_format(SampleFormat::Float32Le));

    match mode {
        Mode::Record => {
            let session = pacat.record_to_file(FILE_PATH).await?;
            println!("Recording...");
            run_until_ctrl_c(session).await?;
        }
        Mode::Play => {
            let session = pacat.play_file(FILE_PATH).await?;
            println!("Playing...");
            tokio::select! {
                res = session.join() => res?,
                _ = signal::ctrl_c() => {
                    // Dropping the join future drops the session, which
                    // delivers SIGTERM to the subprocess
                    println!("Received Ctrl+C, shutting down...");
                }
            }
        }
        Mode::Feedback => {
            let session = pacat.feedback()?;
            println!("Starting feedback loop...");
            run_until_ctrl_c(session).await?;
        }
    }

    Ok(())
}
