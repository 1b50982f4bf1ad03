use crate::error::Result;
use crate::transport::console::{parse_line, ConsoleInput};
use crate::transport::{EventId, InboundEvent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::SplitStream;
use tokio_stream::StreamExt;

/// Spawn a task that reads console lines and forwards parsed events onto a channel.
///
/// The task ends on EOF, on `/quit`, on a read failure, or when the receiving side is
/// dropped. Lines that are not valid UTF-8 are skipped. Event ids start at 1 and increase
/// with every forwarded event.
pub fn spawn_event_reader<R>(
    reader: R,
    tx: Sender<(EventId, InboundEvent)>,
) -> JoinHandle<Result<()>>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(read_events(reader, tx))
}

async fn read_events<R>(reader: R, tx: Sender<(EventId, InboundEvent)>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = SplitStream::new(reader.split(b'\n'));
    let mut next_id: EventId = 1;

    while let Some(bytes) = lines.next().await {
        let line = match String::from_utf8(bytes?) {
            Ok(line) => line,
            Err(err) => {
                log::warn!("Skipping input line that is not valid UTF-8: {}", err);
                continue;
            }
        };

        match parse_line(&line) {
            ConsoleInput::Event(event) => {
                if tx.send((next_id, event)).await.is_err() {
                    break;
                }
                next_id += 1;
            }
            ConsoleInput::Quit => break,
            ConsoleInput::NoAction => continue,
        }
    }
    Ok(())
}
