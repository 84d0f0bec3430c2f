//! Keeping the screen awake while a countdown runs.
//!
//! On Linux desktops this asks `org.freedesktop.ScreenSaver` on the session
//! bus for an inhibition. The request is advisory: if there is no bus or no
//! screensaver service, the failure is logged and the timer carries on.

use std::sync::mpsc::{self, Receiver, Sender};

use async_io::block_on;
use zbus::Connection;

const SERVICE: &str = "org.freedesktop.ScreenSaver";
const PATH: &str = "/org/freedesktop/ScreenSaver";
const APP_NAME: &str = "yintimer";

pub trait KeepAwake {
    fn set_awake(&mut self, awake: bool);
}

/// Used when inhibition is disabled in the settings.
#[derive(Debug, Default)]
pub struct NoopKeepAwake;

impl KeepAwake for NoopKeepAwake {
    fn set_awake(&mut self, _awake: bool) {}
}

/// Forwards awake requests to a background D-Bus thread.
pub struct ScreenSaverInhibitor {
    tx: Sender<bool>,
    awake: bool,
}

impl KeepAwake for ScreenSaverInhibitor {
    fn set_awake(&mut self, awake: bool) {
        if self.awake == awake {
            return;
        }
        self.awake = awake;
        let _ = self.tx.send(awake);
    }
}

async fn inhibit(connection: &Connection) -> zbus::Result<u32> {
    let reply = connection
        .call_method(
            Some(SERVICE),
            PATH,
            Some(SERVICE),
            "Inhibit",
            &(APP_NAME, "Countdown running"),
        )
        .await?;
    reply.body().deserialize::<u32>()
}

async fn uninhibit(connection: &Connection, cookie: u32) -> zbus::Result<()> {
    connection
        .call_method(Some(SERVICE), PATH, Some(SERVICE), "UnInhibit", &(cookie,))
        .await?;
    Ok(())
}

fn run_inhibitor(rx: Receiver<bool>) {
    let connection = match block_on(Connection::session()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("keep-awake: failed to connect to session bus: {e}");
            return;
        }
    };

    let mut cookie: Option<u32> = None;
    while let Ok(awake) = rx.recv() {
        match (awake, cookie) {
            (true, None) => match block_on(inhibit(&connection)) {
                Ok(c) => {
                    log::debug!("keep-awake: inhibited screensaver ({c})");
                    cookie = Some(c);
                }
                Err(e) => log::warn!("keep-awake: inhibit failed: {e}"),
            },
            (false, Some(c)) => {
                if let Err(e) = block_on(uninhibit(&connection, c)) {
                    log::warn!("keep-awake: uninhibit failed: {e}");
                }
                cookie = None;
            }
            _ => {}
        }
    }
}

pub fn spawn_inhibitor() -> ScreenSaverInhibitor {
    let (tx, rx) = mpsc::channel::<bool>();
    std::thread::spawn(move || run_inhibitor(rx));
    ScreenSaverInhibitor { tx, awake: false }
}
