//! A blocking TCP client that seats a bot at a poker server.
//!
//! The client owns the connection and the play state. It applies each
//! notification to the state before handing it to the bot, and answers
//! action requests with whatever the bot decides.

use anyhow::{Error, bail};
use log::{debug, info};
use std::{
    net::{SocketAddr, TcpStream},
    thread,
    time::Duration,
};

use super::{
    super::{
        bot::Player,
        game::{GameEvent, state::CurrentPlayState},
    },
    messages::{ClientMessage, Room, ServerMessage},
    utils,
};

/// Default timeout for writing to the server.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Why a session ended. Both are normal ends of play rather than errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionEnd {
    /// The server announced it was shutting down, then closed the connection.
    ServerShutdown,
    /// The connection went away without notice.
    ConnectionLost,
}

/// A connection that hasn't registered for play yet.
pub struct Client {
    /// The underlying TCP stream.
    pub stream: TcpStream,
}

impl Client {
    /// Connect to a poker server.
    ///
    /// This method attempts to connect with backoff, trying three times
    /// with increasing timeouts (100ms, 500ms, 1s).
    ///
    /// # Errors
    ///
    /// Returns an error if no attempt succeeds.
    pub fn connect(addr: &SocketAddr) -> Result<Self, Error> {
        let mut connect_timeouts = vec![
            Duration::from_secs(1),
            Duration::from_millis(500),
            Duration::from_millis(100),
        ];
        while let Some(connect_timeout) = connect_timeouts.pop() {
            match TcpStream::connect_timeout(addr, connect_timeout) {
                Ok(stream) => {
                    // Hands can be far apart, so reads wait indefinitely.
                    stream.set_read_timeout(None)?;
                    stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
                    stream.set_nodelay(true)?;
                    info!("Connected to {addr}");
                    return Ok(Self { stream });
                }
                Err(error) => {
                    debug!("Connecting to {addr} failed: {error}");
                    thread::sleep(connect_timeout);
                }
            }
        }
        bail!("couldn't connect to {addr}")
    }

    /// Register the player for play in a room.
    ///
    /// The player's name is asked for here, so a player without one fails
    /// at this point.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has no name, the message can't be
    /// sent, or the server rejects the registration.
    pub fn register_for_play<P: Player + ?Sized>(
        mut self,
        player: &mut P,
        room: Room,
    ) -> Result<Session, Error> {
        let name = player.name()?;
        let msg = ClientMessage::RegisterForPlay {
            name: name.clone(),
            room,
        };
        utils::write_prefixed(&mut self.stream, &msg)?;
        Self::recv_ack(&mut self.stream)?;
        info!("{name} registered for play in the {room} room");
        player.on_connection_established();
        Ok(Session {
            stream: self.stream,
            state: CurrentPlayState::new(name),
        })
    }

    pub fn recv_ack(stream: &mut TcpStream) -> Result<(), Error> {
        match utils::read_prefixed::<ServerMessage, TcpStream>(stream) {
            Ok(ServerMessage::Ack) => Ok(()),
            Ok(ServerMessage::ClientError(error)) => bail!(error),
            Ok(response) => {
                bail!("invalid server response: {response}")
            }
            Err(error) => bail!(error),
        }
    }
}

/// A registered connection, tracking the hand the bot is seated in.
pub struct Session {
    /// The underlying TCP stream.
    pub stream: TcpStream,
    state: CurrentPlayState,
}

impl Session {
    pub fn state(&self) -> &CurrentPlayState {
        &self.state
    }

    /// Play until the server goes away.
    ///
    /// # Returns
    ///
    /// * `SessionEnd` - How the session ended once the connection closed
    ///
    /// # Errors
    ///
    /// Returns an error if the server sends something malformed or reports a
    /// client error, or if the player has no answer to an action request.
    pub fn play<P: Player + ?Sized>(&mut self, player: &mut P) -> Result<SessionEnd, Error> {
        let mut shutting_down = false;
        loop {
            let msg = match utils::read_prefixed::<ServerMessage, TcpStream>(&mut self.stream) {
                Ok(msg) => msg,
                Err(error) if error.is_disconnect() => {
                    return Ok(self.end(player, shutting_down));
                }
                Err(error) => bail!(error),
            };
            match msg {
                ServerMessage::GameEvent(event) => {
                    debug!("{event}");
                    if matches!(event, GameEvent::ServerIsShuttingDown(_)) {
                        shutting_down = true;
                    }
                    self.state.apply(&event);
                    event.dispatch(player, &self.state);
                }
                ServerMessage::ActionRequest(request) => {
                    let Some(action) = player.action_required(&request, &self.state) else {
                        bail!(
                            "no action for request {} (offered {request})",
                            request.request_id
                        );
                    };
                    let msg = ClientMessage::ActionResponse {
                        request_id: request.request_id,
                        action,
                    };
                    match utils::write_prefixed(&mut self.stream, &msg) {
                        Ok(()) => {}
                        Err(error) if error.is_disconnect() => {
                            return Ok(self.end(player, shutting_down));
                        }
                        Err(error) => bail!(error),
                    }
                }
                ServerMessage::ClientError(error) => bail!(error),
                ServerMessage::Ack => debug!("Ignoring unexpected ack"),
            }
        }
    }

    fn end<P: Player + ?Sized>(&self, player: &mut P, shutting_down: bool) -> SessionEnd {
        player.on_connection_lost();
        if shutting_down {
            SessionEnd::ServerShutdown
        } else {
            SessionEnd::ConnectionLost
        }
    }
}
