//! Desktop notifications for palette messages (about box, quotes).

use std::collections::HashMap;

use thiserror::Error;
use zbus::{Connection, proxy};

const APP_NAME: &str = "popuppalette";
const DEFAULT_ICON: &str = "dialog-information";
const EXPIRE_TIMEOUT_MS: i32 = 6000;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("failed to connect to session bus: {0}")]
    SessionBus(#[source] zbus::Error),
    #[error("failed to create notifications proxy: {0}")]
    Proxy(#[source] zbus::Error),
    #[error("failed to send notification: {0}")]
    Notify(#[source] zbus::Error),
}

#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    /// Returns the notification id.
    #[allow(clippy::too_many_arguments)]
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<&str>,
        hints: HashMap<&str, zbus::zvariant::Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Shows `summary`/`body` as a desktop notification.
///
/// `icon` defaults to `dialog-information`.
pub async fn send_notification(
    summary: &str,
    body: &str,
    icon: Option<&str>,
) -> Result<u32, NotificationError> {
    let connection = Connection::session()
        .await
        .map_err(NotificationError::SessionBus)?;

    let proxy = NotificationsProxy::new(&connection)
        .await
        .map_err(NotificationError::Proxy)?;

    proxy
        .notify(
            APP_NAME,
            0,
            icon.unwrap_or(DEFAULT_ICON),
            summary,
            body,
            vec![],
            HashMap::new(),
            EXPIRE_TIMEOUT_MS,
        )
        .await
        .map_err(NotificationError::Notify)
}

/// Sends on the runtime without waiting; failures are logged.
pub fn send_notification_async(
    runtime_handle: &tokio::runtime::Handle,
    summary: String,
    body: String,
    icon: Option<String>,
) {
    runtime_handle.spawn(async move {
        match send_notification(&summary, &body, icon.as_deref()).await {
            Ok(id) => log::debug!("Notification {} shown", id),
            Err(e) => log::warn!("{}", e),
        }
    });
}
