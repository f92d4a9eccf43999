use dioxus::prelude::*;

/// Reports the current status, then every change, until the page unloads.
const CONNECTIVITY_SCRIPT: &str = r#"
dioxus.send(navigator.onLine);
window.addEventListener("online", () => dioxus.send(true));
window.addEventListener("offline", () => dioxus.send(false));
await new Promise(() => {});
"#;

/// Banner shown while the browser reports no network connection.
#[component]
pub fn OfflineIndicator() -> Element {
    let mut online = use_signal(|| true);

    use_future(move || async move {
        let mut events = document::eval(CONNECTIVITY_SCRIPT);
        loop {
            match events.recv::<bool>().await {
                Ok(status) => {
                    if status != online() {
                        tracing::info!(online = status, "Connectivity changed");
                    }
                    online.set(status);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Connectivity listener stopped");
                    break;
                }
            }
        }
    });

    rsx! {
        if !online() {
            div { class: "offline-indicator", role: "status",
                "You are offline. Some content may be out of date."
            }
        }
    }
}
