use anyhow::Result;
use surface::Surface;

/// The closed set of lifecycle hooks every page variant implements. Pages are
/// tagged variant types sharing this contract; the common teardown step is
/// composed in through [`release_session`], not inherited.
pub trait Page {
    fn handle(&mut self) -> Result<()>;
    fn render(&mut self, surface: &mut dyn Surface) -> Result<()>;
    fn setup_event_listeners(&mut self);
    fn clean(&mut self);
}

/// Handle on a running game loop. The loop itself lives outside this crate;
/// a page only owns the handle and is responsible for stopping it on
/// teardown.
pub trait GameSession {
    fn stop(&mut self);
}

/// Starts a game loop and hands back its session handle (the AI opponent's
/// entry point, for the AI page).
pub trait SessionLauncher {
    fn launch(&mut self) -> Box<dyn GameSession>;
}

/// Shared teardown step: stop the session, if one is running, and drop its
/// handle. Idempotent.
pub fn release_session(slot: &mut Option<Box<dyn GameSession>>) {
    if let Some(mut session) = slot.take() {
        log::debug!("stopping game session");
        session.stop();
    }
}

/// The single-player page: plays against the AI opponent. Owns the session
/// handle for the AI game loop and releases it when cleaned.
pub struct AiPage<L: SessionLauncher> {
    launcher: L,
    session: Option<Box<dyn GameSession>>,
}

impl<L: SessionLauncher> AiPage<L> {
    pub fn new(launcher: L) -> Self {
        AiPage {
            launcher,
            session: None,
        }
    }

    pub fn start_game(&mut self) {
        log::debug!("starting ai game session");
        self.session = Some(self.launcher.launch());
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }
}

impl<L: SessionLauncher> Page for AiPage<L> {
    fn handle(&mut self) -> Result<()> {
        if !self.is_running() {
            self.start_game();
        }
        Ok(())
    }

    fn render(&mut self, _surface: &mut dyn Surface) -> Result<()> {
        // The running session owns the frame cadence; there is nothing for
        // the page to draw between frames.
        Ok(())
    }

    fn setup_event_listeners(&mut self) {
        log::trace!("ai page listeners attached");
    }

    fn clean(&mut self) {
        release_session(&mut self.session);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{AiPage, GameSession, Page, SessionLauncher};

    struct FlagSession {
        stopped: Rc<Cell<bool>>,
    }

    impl GameSession for FlagSession {
        fn stop(&mut self) {
            self.stopped.set(true);
        }
    }

    struct FlagLauncher {
        launched: Rc<Cell<u32>>,
        stopped: Rc<Cell<bool>>,
    }

    impl SessionLauncher for FlagLauncher {
        fn launch(&mut self) -> Box<dyn GameSession> {
            self.launched.set(self.launched.get() + 1);
            Box::new(FlagSession {
                stopped: self.stopped.clone(),
            })
        }
    }

    #[test]
    fn handle_starts_once_and_clean_stops() {
        let launched = Rc::new(Cell::new(0));
        let stopped = Rc::new(Cell::new(false));
        let mut page = AiPage::new(FlagLauncher {
            launched: launched.clone(),
            stopped: stopped.clone(),
        });

        page.handle().unwrap();
        page.handle().unwrap();
        assert_eq!(launched.get(), 1);
        assert!(page.is_running());

        page.clean();
        assert!(stopped.get());
        assert!(!page.is_running());

        // A second clean has no session left to stop.
        page.clean();
    }
}
