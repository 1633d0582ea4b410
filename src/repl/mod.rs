//! REPL Module
//!
//! The interactive command loop.

pub mod command;
pub mod session;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::api::Fetch;
use crate::error::Result;

pub use command::{clean_input, Command, CommandInfo, COMMANDS};
pub use session::{describe, Flow, Pager, Session};

/// Printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Reads commands from `input` until `exit` or end of input.
///
/// Command failures are printed and the loop carries on; only I/O errors on
/// `input` or `output` end it early.
pub async fn run<F, R, W>(session: &mut Session<F>, input: R, output: &mut W) -> Result<()>
where
    F: Fetch,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            // Keep the shell prompt on its own line
            output.write_all(b"\n").await?;
            break;
        };

        let parsed = Command::parse(&clean_input(&line));
        let flow = match parsed {
            Ok(None) => Flow::Continue,
            Ok(Some(command)) => {
                debug!("Running {:?}", command);
                match session.execute(command, output).await {
                    Ok(flow) => flow,
                    Err(e) => {
                        warn!("Command failed: {}", e);
                        session::say(output, &e.to_string()).await?;
                        Flow::Continue
                    }
                }
            }
            Err(e) => {
                session::say(output, &e.to_string()).await?;
                Flow::Continue
            }
        };

        output.flush().await?;
        if flow == Flow::Exit {
            break;
        }
    }

    Ok(())
}
