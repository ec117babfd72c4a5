use std::sync::Arc;
use std::thread;

use log::warn;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    AppState, FetchKey, Message, RepositoryFetcher, RepositoryId, Route, StdResult, UpdateAction,
    open_in_browser, update,
};

use super::{event, render, terminal};

/// Runs the terminal client until the user quits.
pub async fn run(fetcher: Arc<dyn RepositoryFetcher>) -> StdResult<()> {
    terminal::install_panic_hook();
    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, fetcher).await;
    ratatui::restore();

    result
}

async fn run_loop(
    terminal: &mut DefaultTerminal,
    fetcher: Arc<dyn RepositoryFetcher>,
) -> StdResult<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_thread(tx.clone());

    let mut state = AppState::default();
    let mut pending = update(&mut state, Message::Navigate(Route::List.to_path()));

    loop {
        for action in pending.drain(..) {
            match action {
                UpdateAction::FetchList { key } => spawn_list_fetch(key, &fetcher, &tx),
                UpdateAction::FetchDetail { key, id } => spawn_detail_fetch(key, id, &fetcher, &tx),
                UpdateAction::OpenExternal { url } => {
                    if let Err(error) = open_in_browser(&url) {
                        warn!("Failed to open {url}: {error}");
                    }
                }
                UpdateAction::Quit => return Ok(()),
            }
        }

        terminal.draw(|frame| render::view(frame, &state))?;

        let Some(message) = rx.recv().await else {
            return Ok(());
        };
        pending = update(&mut state, message);
    }
}

/// Polls terminal events on a dedicated thread; `event::read` blocks.
fn spawn_input_thread(tx: UnboundedSender<Message>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Some(message)) => {
                    if tx.send(message).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(error) => {
                    warn!("Terminal event error: {error:?}");
                    break;
                }
            }
        }
    });
}

/// Spawns the list fetch; its only effect is the tagged message it sends back.
fn spawn_list_fetch(
    key: FetchKey,
    fetcher: &Arc<dyn RepositoryFetcher>,
    tx: &UnboundedSender<Message>,
) {
    let fetcher = Arc::clone(fetcher);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = fetcher.fetch_all().await;
        let _ = tx.send(Message::ListFetched { key, result });
    });
}

/// Spawns the detail fetch; its only effect is the tagged message it sends back.
fn spawn_detail_fetch(
    key: FetchKey,
    id: RepositoryId,
    fetcher: &Arc<dyn RepositoryFetcher>,
    tx: &UnboundedSender<Message>,
) {
    let fetcher = Arc::clone(fetcher);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = fetcher.fetch_one(id).await;
        let _ = tx.send(Message::DetailFetched { key, result });
    });
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use mockall::predicate::eq;

    use crate::{MockRepositoryFetcher, Repository};

    use super::*;

    #[tokio::test]
    async fn list_fetch_reports_back_under_its_key() {
        let fetcher = {
            let mut fetcher = MockRepositoryFetcher::new();
            fetcher
                .expect_fetch_all()
                .returning(|| Ok(vec![Repository::dummy(1, "repository-1")]))
                .times(1);

            fetcher
        };
        let fetcher: Arc<dyn RepositoryFetcher> = Arc::new(fetcher);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let key = FetchKey::default().next();

        spawn_list_fetch(key, &fetcher, &tx);

        match rx.recv().await.unwrap() {
            Message::ListFetched {
                key: reported,
                result,
            } => {
                assert_eq!(key, reported);
                assert_eq!(1, result.unwrap().len());
            }
            other => panic!("Unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn detail_fetch_reports_back_under_its_key() {
        let fetcher = {
            let mut fetcher = MockRepositoryFetcher::new();
            fetcher
                .expect_fetch_one()
                .with(eq(RepositoryId(7)))
                .returning(|_| Ok(Some(Repository::dummy(7, "repository-7"))))
                .times(1);

            fetcher
        };
        let fetcher: Arc<dyn RepositoryFetcher> = Arc::new(fetcher);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let key = FetchKey::default().next();

        spawn_detail_fetch(key, RepositoryId(7), &fetcher, &tx);

        match rx.recv().await.unwrap() {
            Message::DetailFetched {
                key: reported,
                result,
            } => {
                assert_eq!(key, reported);
                assert_eq!(RepositoryId(7), result.unwrap().unwrap().id());
            }
            other => panic!("Unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_errors_are_reported_not_thrown() {
        let fetcher = {
            let mut fetcher = MockRepositoryFetcher::new();
            fetcher
                .expect_fetch_all()
                .returning(|| Err(anyhow!("connection refused")))
                .times(1);

            fetcher
        };
        let fetcher: Arc<dyn RepositoryFetcher> = Arc::new(fetcher);
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_list_fetch(FetchKey::default(), &fetcher, &tx);

        match rx.recv().await.unwrap() {
            Message::ListFetched { result, .. } => {
                result.expect_err("Expected an error");
            }
            other => panic!("Unexpected message: {other:?}"),
        }
    }
}
