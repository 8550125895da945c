// Manages background network operations for the TUI.
use crate::api::EventApi;
use crate::tui::action::{Action, AppEvent};
use tokio::sync::mpsc::{Receiver, Sender};

pub async fn run_network_actor(
    api: EventApi,
    mut action_rx: Receiver<Action>,
    event_tx: Sender<AppEvent>,
) {
    // 0. Initial fetch
    let _ = event_tx
        .send(AppEvent::Status("Loading...".to_string()))
        .await;
    match api.list().await {
        Ok(events) => {
            let _ = event_tx.send(AppEvent::EventsLoaded(events)).await;
            let _ = event_tx.send(AppEvent::Status("Ready.".to_string())).await;
        }
        Err(e) => {
            log::error!("initial load failed: {}", e);
            let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
        }
    }

    // 1. Action loop
    while let Some(action) = action_rx.recv().await {
        match action {
            Action::Quit => break,

            Action::Refresh => match api.list().await {
                Ok(events) => {
                    let _ = event_tx.send(AppEvent::EventsLoaded(events)).await;
                    let _ = event_tx
                        .send(AppEvent::Status("Refreshed.".to_string()))
                        .await;
                }
                Err(e) => {
                    let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                }
            },

            Action::CreateEvent(draft) => match api.create(&draft).await {
                Ok(created) => {
                    let _ = event_tx.send(AppEvent::EventCreated(created)).await;
                    let _ = event_tx
                        .send(AppEvent::Status("Created.".to_string()))
                        .await;
                }
                Err(e) => {
                    log::warn!("create failed: {}", e);
                    let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                }
            },

            Action::UpdateEvent(event) => match api.replace(&event.id, &event).await {
                Ok(echo) => {
                    // The echo is advisory; the store applies the values the
                    // user actually saved.
                    log::debug!("backend echoed update for {}", echo.id);
                    let _ = event_tx.send(AppEvent::EventUpdated(event)).await;
                    let _ = event_tx.send(AppEvent::Status("Saved.".to_string())).await;
                }
                Err(e) => {
                    log::warn!("update failed: {}", e);
                    let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                    // On error, reload to revert the UI to server truth.
                    if let Ok(events) = api.list().await {
                        let _ = event_tx.send(AppEvent::EventsLoaded(events)).await;
                    }
                }
            },

            Action::DeleteEvent(id) => match api.remove(&id).await {
                Ok(deleted) => {
                    let _ = event_tx.send(AppEvent::EventDeleted(deleted)).await;
                    let _ = event_tx
                        .send(AppEvent::Status("Deleted.".to_string()))
                        .await;
                }
                Err(e) => {
                    log::warn!("delete failed: {}", e);
                    let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                    if let Ok(events) = api.list().await {
                        let _ = event_tx.send(AppEvent::EventsLoaded(events)).await;
                    }
                }
            },
        }
    }
}
